pub mod json_backend;

use std::path::PathBuf;

use crate::domain::ledger::Ledger;
use crate::domain::policy::PricingPolicy;
use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing ledgers.
///
/// The engine treats this as a blob store: the full record set is loaded
/// at startup and written back after every mutation.
pub trait StorageBackend: Send + Sync {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Ledger>;
    fn ledger_path(&self, name: &str) -> PathBuf;

    /// Loads the named ledger, or returns a fresh empty one with the
    /// given policy when nothing has been persisted yet.
    fn load_or_default(&self, name: &str, policy: PricingPolicy) -> Result<Ledger> {
        if self.ledger_path(name).exists() {
            self.load(name)
        } else {
            Ok(Ledger::new(name, policy))
        }
    }
}

pub use json_backend::JsonStorage;
