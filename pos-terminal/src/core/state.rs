//! 终端状态容器
//!
//! [`PosState`] 持有菜单、订单存储和持久化适配器。所有修改都经过这里：
//! 先更新内存 (内存为准)，再把新快照交给 [`StateStore`] 保存一次。
//! 保存失败只记录日志，不回滚。

use crate::billing::ConfirmedPayment;
use crate::billing::money;
use crate::cart::Cart;
use crate::catalog::MenuCatalog;
use crate::core::error::PosResult;
use crate::orders::OrderStore;
use crate::storage::StateStore;
use shared::{MenuItem, MenuItemCreate, MenuItemUpdate, Order, OrderStatus};
use tracing::{error, info, warn};

pub struct PosState<S: StateStore> {
    catalog: MenuCatalog,
    orders: OrderStore,
    store: S,
}

impl<S: StateStore> PosState<S> {
    /// 从持久化层恢复状态
    ///
    /// - 菜单从未保存过 → 初始菜单 (并立即保存)
    /// - 订单从未保存过 → 空列表
    /// - 数据无法解析 → 记录警告，按"从未保存"处理
    pub fn load(store: S) -> Self {
        let catalog = match store.load_menu() {
            Ok(Some(items)) => MenuCatalog::new(items),
            Ok(None) => {
                info!("No saved menu, loading initial menu");
                let catalog = MenuCatalog::seeded();
                persist_menu(&store, catalog.items());
                catalog
            }
            Err(e) => {
                warn!(error = %e, "Saved menu unreadable, falling back to initial menu");
                MenuCatalog::seeded()
            }
        };

        let saved_orders = match store.load_orders() {
            Ok(orders) => orders.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Saved orders unreadable, starting with an empty list");
                Vec::new()
            }
        };
        let last_seq = store.load_order_seq().unwrap_or_else(|e| {
            warn!(error = %e, "Order counter unreadable, reseeding from stored ids");
            0
        });
        let orders = OrderStore::new(saved_orders, last_seq);

        info!(
            menu_items = catalog.items().len(),
            orders = orders.len(),
            last_seq = orders.last_seq(),
            "State loaded"
        );

        Self {
            catalog,
            orders,
            store,
        }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn orders(&self) -> &OrderStore {
        &self.orders
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========== Menu ==========

    pub fn create_menu_item(&mut self, draft: MenuItemCreate) -> PosResult<MenuItem> {
        let snapshot = self.catalog.create(draft)?;
        persist_menu(&self.store, &snapshot);
        let item = snapshot[0].clone();
        info!(item_id = %item.id, name = %item.name, "Menu item created");
        Ok(item)
    }

    pub fn update_menu_item(&mut self, id: &str, update: MenuItemUpdate) -> PosResult<MenuItem> {
        let snapshot = self.catalog.update(id, update)?;
        persist_menu(&self.store, &snapshot);
        info!(item_id = %id, "Menu item updated");
        self.menu_item(id)
    }

    pub fn set_item_availability(&mut self, id: &str, available: bool) -> PosResult<MenuItem> {
        let snapshot = self.catalog.set_availability(id, available)?;
        persist_menu(&self.store, &snapshot);
        info!(item_id = %id, available, "Menu item availability changed");
        self.menu_item(id)
    }

    pub fn delete_menu_item(&mut self, id: &str) -> PosResult<()> {
        let snapshot = self.catalog.delete(id)?;
        persist_menu(&self.store, &snapshot);
        info!(item_id = %id, "Menu item deleted");
        Ok(())
    }

    fn menu_item(&self, id: &str) -> PosResult<MenuItem> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| crate::catalog::CatalogError::NotFound(id.to_string()).into())
    }

    // ========== Orders ==========

    /// 结账成功：生成订单 (PENDING)、保存、清空购物车
    pub fn complete_checkout(
        &mut self,
        cart: &mut Cart,
        payment: ConfirmedPayment,
        table_id: &str,
        cashier_name: &str,
    ) -> PosResult<Order> {
        let totals = money::compute_totals(&payment.lines, payment.discount_percent);
        let order = Order {
            id: self.orders.next_id(),
            table_id: table_id.to_string(),
            items: payment.lines,
            subtotal: totals.subtotal,
            discount: totals.discount,
            total: totals.total,
            status: OrderStatus::Pending,
            timestamp: shared::util::now_millis(),
            payment_method: payment.method,
            cashier_name: cashier_name.to_string(),
            amount_tendered: payment.amount_tendered,
            change: Some(payment.change),
        };

        let snapshot = self.orders.append(order.clone())?;
        persist_orders(&self.store, &snapshot, self.orders.last_seq());
        cart.clear();

        info!(
            order_id = %order.id,
            total = order.total,
            method = %order.payment_method,
            "Order placed"
        );
        Ok(order)
    }

    pub fn advance_order(&mut self, order_id: &str) -> PosResult<Order> {
        let order = self.orders.advance(order_id)?;
        persist_orders(&self.store, &self.orders.snapshot(), self.orders.last_seq());
        Ok(order)
    }

    pub fn update_order_status(&mut self, order_id: &str, to: OrderStatus) -> PosResult<Order> {
        let order = self.orders.update_status(order_id, to)?;
        persist_orders(&self.store, &self.orders.snapshot(), self.orders.last_seq());
        Ok(order)
    }
}

fn persist_menu<S: StateStore>(store: &S, items: &[MenuItem]) {
    if let Err(e) = store.save_menu(items) {
        error!(error = %e, "Failed to persist menu");
    }
}

fn persist_orders<S: StateStore>(store: &S, orders: &[Order], last_seq: u64) {
    if let Err(e) = store.save_orders(orders, last_seq) {
        error!(error = %e, "Failed to persist orders");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::billing::initiate_checkout;
    use crate::core::PosError;
    use crate::orders::LifecycleError;
    use crate::storage::{MENU_KEY, ORDERS_KEY, RedbStateStore, StorageError, StorageResult};
    use shared::PaymentMethod;

    /// Store whose writes always fail
    struct BrokenStore;

    fn broken() -> StorageError {
        StorageError::Io(std::io::Error::other("disk unplugged"))
    }

    impl StateStore for BrokenStore {
        fn load_menu(&self) -> StorageResult<Option<Vec<MenuItem>>> {
            Ok(None)
        }
        fn save_menu(&self, _: &[MenuItem]) -> StorageResult<()> {
            Err(broken())
        }
        fn load_orders(&self) -> StorageResult<Option<Vec<Order>>> {
            Err(broken())
        }
        fn save_orders(&self, _: &[Order], _: u64) -> StorageResult<()> {
            Err(broken())
        }
        fn load_order_seq(&self) -> StorageResult<u64> {
            Err(broken())
        }
    }

    fn checkout<S: StateStore>(state: &mut PosState<S>, ids: &[&str], method: PaymentMethod) -> Order {
        let mut cart = Cart::new();
        for id in ids {
            let item = state.catalog().get(id).unwrap().clone();
            cart.add_item(&item);
        }
        let mut session = initiate_checkout(&cart).unwrap();
        session.set_payment_method(method);
        let payment = session.confirm().unwrap();
        state
            .complete_checkout(&mut cart, payment, "3", "nimal")
            .unwrap()
    }

    #[test]
    fn test_first_load_seeds_and_saves_menu() {
        let store = RedbStateStore::open_in_memory().unwrap();
        let state = PosState::load(store.clone());
        assert_eq!(state.catalog().items().len(), 13);
        assert!(state.orders().is_empty());
        assert_eq!(store.load_menu().unwrap().unwrap().len(), 13);
    }

    #[test]
    fn test_malformed_orders_fall_back_to_empty() {
        let store = RedbStateStore::open_in_memory().unwrap();
        store.put_raw(ORDERS_KEY, b"[{broken").unwrap();
        store.put_raw(MENU_KEY, b"not json").unwrap();

        let state = PosState::load(store);
        assert!(state.orders().is_empty());
        assert_eq!(state.catalog().items().len(), 13);
    }

    #[test]
    fn test_checkout_creates_pending_order_and_persists() {
        let store = RedbStateStore::open_in_memory().unwrap();
        let mut state = PosState::load(store.clone());

        let mut cart = Cart::new();
        let dosa = state.catalog().get("2").unwrap().clone();
        cart.add_item(&dosa);
        cart.set_discount_percent(5).unwrap();
        let mut session = initiate_checkout(&cart).unwrap();
        session.set_amount_tendered(Some(1000));
        let payment = session.confirm().unwrap();

        let order = state
            .complete_checkout(&mut cart, payment, "3", "nimal")
            .unwrap();
        assert_eq!(order.id, "100001");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.subtotal, 599);
        assert_eq!(order.discount, 30);
        assert_eq!(order.total, 569);
        assert_eq!(order.change, Some(431));
        assert!(cart.is_empty());
        assert_eq!(cart.discount_percent(), 0);

        let saved = store.load_orders().unwrap().unwrap();
        assert_eq!(saved, vec![order]);
        assert_eq!(store.load_order_seq().unwrap(), 100_001);
    }

    #[test]
    fn test_order_ids_continue_after_reload() {
        let store = RedbStateStore::open_in_memory().unwrap();
        let mut state = PosState::load(store.clone());
        checkout(&mut state, &["1"], PaymentMethod::Card);
        checkout(&mut state, &["2"], PaymentMethod::Qr);
        drop(state);

        let mut state = PosState::load(store);
        let order = checkout(&mut state, &["3"], PaymentMethod::Card);
        assert_eq!(order.id, "100003");
    }

    #[test]
    fn test_menu_edits_persist() {
        let store = RedbStateStore::open_in_memory().unwrap();
        let mut state = PosState::load(store.clone());
        state.set_item_availability("1", false).unwrap();
        state.delete_menu_item("13").unwrap();
        let created = state
            .create_menu_item(MenuItemCreate {
                name: "Masala Dosa".into(),
                price: 650,
                ..Default::default()
            })
            .unwrap();

        let saved = store.load_menu().unwrap().unwrap();
        assert_eq!(saved.len(), 13);
        assert_eq!(saved[0].id, created.id);
        assert!(!saved.iter().find(|i| i.id == "1").unwrap().available);
        assert!(saved.iter().all(|i| i.id != "13"));
    }

    #[test]
    fn test_deleted_item_stays_in_history() {
        let store = RedbStateStore::open_in_memory().unwrap();
        let mut state = PosState::load(store);
        let order = checkout(&mut state, &["13"], PaymentMethod::Card);
        state.delete_menu_item("13").unwrap();
        assert_eq!(
            state.orders().get(&order.id).unwrap().items[0].name(),
            "Fish Curry"
        );
    }

    #[test]
    fn test_lifecycle_through_state() {
        let store = RedbStateStore::open_in_memory().unwrap();
        let mut state = PosState::load(store.clone());
        let order = checkout(&mut state, &["5"], PaymentMethod::Card);

        assert!(matches!(
            state.update_order_status(&order.id, OrderStatus::Completed),
            Err(PosError::Lifecycle(LifecycleError::InvalidTransition { .. }))
        ));
        state.advance_order(&order.id).unwrap();
        let saved = store.load_orders().unwrap().unwrap();
        assert_eq!(saved[0].status, OrderStatus::Kitchen);
    }

    #[test]
    fn test_persistence_failure_is_swallowed() {
        let mut state = PosState::load(BrokenStore);
        assert_eq!(state.catalog().items().len(), 13);

        let order = checkout(&mut state, &["11"], PaymentMethod::Card);
        assert_eq!(order.total, 1000);
        assert_eq!(state.orders().len(), 1);

        state.advance_order(&order.id).unwrap();
        state.set_item_availability("11", false).unwrap();
        assert!(!state.catalog().get("11").unwrap().available);
    }
}
