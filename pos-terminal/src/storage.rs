//! redb-based persistence for terminal state
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `pos_state` | `"orders"` | JSON `[Order]` | Full order list |
//! | `pos_state` | `"menu"` | JSON `[MenuItem]` | Full menu |
//! | `sequences` | `"order_seq"` | `u64` | Last issued order number |
//!
//! Every committed mutation rewrites the whole value for its key. There is no
//! schema version field; an unreadable value is reported as
//! [`StorageError::Serialization`] and the caller decides how to fall back.
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns, and orders are
//! written together with the order counter in one transaction.

use redb::{Database, ReadableDatabase, TableDefinition};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::{MenuItem, Order};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Key-value state: key = "orders" | "menu", value = JSON document
const STATE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("pos_state");

/// Counters: key = "order_seq", value = u64
const SEQUENCE_TABLE: TableDefinition<&str, u64> = TableDefinition::new("sequences");

pub const ORDERS_KEY: &str = "orders";
pub const MENU_KEY: &str = "menu";
const ORDER_SEQ_KEY: &str = "order_seq";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence adapter behind [`PosState`](crate::core::PosState)
///
/// `None` from a loader means the key was never written.
pub trait StateStore {
    fn load_menu(&self) -> StorageResult<Option<Vec<MenuItem>>>;

    fn save_menu(&self, items: &[MenuItem]) -> StorageResult<()>;

    fn load_orders(&self) -> StorageResult<Option<Vec<Order>>>;

    /// Orders and the counter are committed together
    fn save_orders(&self, orders: &[Order], last_seq: u64) -> StorageResult<()>;

    fn load_order_seq(&self) -> StorageResult<u64>;
}

/// State store backed by redb
#[derive(Clone)]
pub struct RedbStateStore {
    db: Arc<Database>,
}

impl RedbStateStore {
    /// Open or create the database at the given path
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, dry runs)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create all tables if they don't exist
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(STATE_TABLE)?;
            let _ = write_txn.open_table(SEQUENCE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATE_TABLE)?;

        match table.get(key)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    /// Overwrite a key with arbitrary bytes
    #[cfg(test)]
    pub(crate) fn put_raw(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.insert(key, bytes)?;
        }
        txn.commit()?;
        Ok(())
    }
}

impl StateStore for RedbStateStore {
    fn load_menu(&self) -> StorageResult<Option<Vec<MenuItem>>> {
        self.get_json(MENU_KEY)
    }

    fn save_menu(&self, items: &[MenuItem]) -> StorageResult<()> {
        self.put_json(MENU_KEY, items)
    }

    fn load_orders(&self) -> StorageResult<Option<Vec<Order>>> {
        self.get_json(ORDERS_KEY)
    }

    fn save_orders(&self, orders: &[Order], last_seq: u64) -> StorageResult<()> {
        let bytes = serde_json::to_vec(orders)?;
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(STATE_TABLE)?;
            table.insert(ORDERS_KEY, bytes.as_slice())?;
            let mut seq = txn.open_table(SEQUENCE_TABLE)?;
            seq.insert(ORDER_SEQ_KEY, last_seq)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn load_order_seq(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SEQUENCE_TABLE)?;
        Ok(table
            .get(ORDER_SEQ_KEY)?
            .map(|guard| guard.value())
            .unwrap_or(0))
    }
}
