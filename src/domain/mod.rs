//! Domain models for the shop ledger: transactions, expenses, supplier
//! accounts, settlements, and the pricing policy. No I/O here.

pub mod common;
pub mod expense;
pub mod ledger;
pub mod money;
pub mod policy;
pub mod settlement;
pub mod supplier;
pub mod transaction;

pub use common::{Displayable, Identifiable};
pub use expense::{Expense, DEFAULT_EXPENSE_NAME};
pub use ledger::{Ledger, CURRENT_SCHEMA_VERSION};
pub use money::{parse_amount, share, Amount, AmountError};
pub use policy::{PricingPolicy, SPLIT_COST_RATE, SPLIT_PROFIT_RATE};
pub use settlement::{SupplierSettlement, DEFAULT_SETTLEMENT_NOTE};
pub use supplier::{Network, NetworkAccount, SupplierBook, DEBT_MARKUP, STOCK_MARKUP};
pub use transaction::{Transaction, TransactionKind, DEFAULT_CUSTOMER};
