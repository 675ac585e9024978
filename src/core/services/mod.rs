pub mod expense_service;
pub mod summary_service;
pub mod supplier_service;
pub mod transaction_service;

pub use expense_service::ExpenseService;
pub use summary_service::{ExpenseBasis, LedgerSummary, SummaryService};
pub use supplier_service::SupplierService;
pub use transaction_service::{TransactionDraft, TransactionService};

use crate::domain::money::AmountError;
use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("{0}")]
    Invalid(String),
}

impl From<AmountError> for ServiceError {
    fn from(err: AmountError) -> Self {
        ServiceError::Invalid(err.to_string())
    }
}
