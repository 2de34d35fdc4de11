use crate::auth::AuthError;
use crate::billing::{CheckoutError, PaymentError};
use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::orders::{LifecycleError, StoreError};
use crate::storage::StorageError;
use pos_printer::PrintError;
use shared::{AppError, ErrorCode};
use thiserror::Error;

/// 终端错误 - 汇总各模块错误
#[derive(Debug, Error)]
pub enum PosError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Print error: {0}")]
    Print(#[from] PrintError),
}

pub type PosResult<T> = Result<T, PosError>;

/// 将存储错误转换为错误码
fn classify_storage_error(e: &StorageError) -> ErrorCode {
    // 先按枚举变体精确匹配
    if let StorageError::Serialization(_) = e {
        return ErrorCode::StorageCorrupted;
    }

    // redb / IO 错误通过字符串匹配分类
    let err_str = e.to_string().to_lowercase();

    // 磁盘空间不足
    if err_str.contains("no space") || err_str.contains("disk full") || err_str.contains("enospc")
    {
        return ErrorCode::StorageFull;
    }

    // 数据损坏
    if err_str.contains("corrupt") || err_str.contains("invalid database") {
        return ErrorCode::StorageCorrupted;
    }

    // 默认：数据库错误 (文件被占用等)
    ErrorCode::DatabaseError
}

impl From<PosError> for AppError {
    fn from(err: PosError) -> Self {
        let message = err.to_string();
        let code = match &err {
            PosError::Auth(AuthError::MissingCredentials) => ErrorCode::InvalidCredentials,
            PosError::Auth(AuthError::ViewDenied { .. }) => ErrorCode::PermissionDenied,
            PosError::Catalog(CatalogError::NameRequired) => ErrorCode::RequiredField,
            PosError::Catalog(CatalogError::InvalidPrice(_)) => ErrorCode::MenuItemInvalidPrice,
            PosError::Catalog(CatalogError::NotFound(_)) => ErrorCode::MenuItemNotFound,
            PosError::Cart(CartError::InvalidDiscount(_)) => ErrorCode::InvalidDiscount,
            PosError::Checkout(CheckoutError::EmptyCart) => ErrorCode::OrderEmpty,
            PosError::Checkout(CheckoutError::InsufficientCash { .. })
            | PosError::Payment(PaymentError::Checkout(CheckoutError::InsufficientCash { .. })) => {
                ErrorCode::PaymentInsufficientAmount
            }
            PosError::Payment(PaymentError::Checkout(CheckoutError::EmptyCart)) => {
                ErrorCode::OrderEmpty
            }
            PosError::Payment(PaymentError::Cancelled) => ErrorCode::PaymentCancelled,
            PosError::Lifecycle(LifecycleError::OrderNotFound(_))
            | PosError::Store(StoreError::OrderNotFound(_)) => ErrorCode::OrderNotFound,
            PosError::Lifecycle(LifecycleError::AlreadyCompleted(_)) => {
                ErrorCode::OrderAlreadyCompleted
            }
            PosError::Lifecycle(LifecycleError::InvalidTransition { .. }) => {
                ErrorCode::InvalidStatusTransition
            }
            PosError::Store(StoreError::DuplicateOrderId(_)) => ErrorCode::DuplicateOrderId,
            PosError::Storage(e) => {
                let code = classify_storage_error(e);
                tracing::error!(error = %e, error_code = ?code, "Storage error occurred");
                code
            }
            PosError::Print(_) => ErrorCode::PrinterError,
        };
        AppError::with_message(code, message)
    }
}
