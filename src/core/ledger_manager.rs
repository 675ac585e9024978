use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::ledger::Ledger;
use crate::domain::policy::PricingPolicy;
use crate::errors::LedgerError;
use crate::storage::StorageBackend;

/// Facade that coordinates the in-memory ledger with persistence.
///
/// Every mutating operation goes through [`mutate`](Self::mutate), which
/// persists the ledger immediately afterwards — the control flow of the
/// original system, where each form submission saved the whole state.
pub struct LedgerManager {
    current: Ledger,
    name: String,
    storage: Box<dyn StorageBackend>,
}

impl LedgerManager {
    /// Opens the named ledger, creating an empty one with the given
    /// policy when no saved state exists.
    pub fn open(
        storage: Box<dyn StorageBackend>,
        name: &str,
        policy: PricingPolicy,
    ) -> Result<Self, LedgerError> {
        let current = storage.load_or_default(name, policy)?;
        Ok(Self {
            current,
            name: name.to_string(),
            storage,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.current
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies a mutation and persists the result.
    ///
    /// A persistence failure is surfaced to the caller and logged as a
    /// warning; the in-memory mutation stays applied so the session keeps
    /// working (the original system had no recovery surface at all).
    pub fn mutate<T>(
        &mut self,
        operation: impl FnOnce(&mut Ledger) -> ServiceResult<T>,
    ) -> ServiceResult<T> {
        let value = operation(&mut self.current)?;
        if let Err(err) = self.storage.save(&self.current, &self.name) {
            tracing::warn!(ledger = %self.name, error = %err, "failed to persist ledger");
            return Err(ServiceError::Ledger(err));
        }
        Ok(value)
    }

    /// Replaces all records with an empty ledger and persists it. The
    /// active pricing policy is kept.
    pub fn reset(&mut self) -> ServiceResult<()> {
        let policy = self.current.policy.clone();
        self.current = Ledger::new(self.name.clone(), policy);
        self.mutate(|_| Ok(()))
    }

    /// Reloads the ledger from storage, discarding in-memory state.
    pub fn reload(&mut self) -> Result<(), LedgerError> {
        self.current = self
            .storage
            .load_or_default(&self.name, self.current.policy.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::{ExpenseService, TransactionDraft, TransactionService};
    use crate::domain::transaction::TransactionKind;
    use crate::storage::JsonStorage;
    use tempfile::tempdir;

    fn manager_in(base: &std::path::Path) -> LedgerManager {
        let storage = JsonStorage::new(Some(base.to_path_buf())).unwrap();
        LedgerManager::open(Box::new(storage), "shop", PricingPolicy::DebtAmortization).unwrap()
    }

    #[test]
    fn mutations_are_persisted_immediately() {
        let temp = tempdir().unwrap();
        let mut manager = manager_in(temp.path());
        manager
            .mutate(|ledger| {
                TransactionService::record(
                    ledger,
                    TransactionDraft::new(TransactionKind::Bill, 10_000).cost(9_000),
                )
            })
            .unwrap();

        let reopened = manager_in(temp.path());
        assert_eq!(reopened.ledger().transaction_count(), 1);
    }

    #[test]
    fn reset_clears_records_and_persists_the_empty_state() {
        let temp = tempdir().unwrap();
        let mut manager = manager_in(temp.path());
        manager
            .mutate(|ledger| ExpenseService::record(ledger, None, 1_000))
            .unwrap();
        manager.reset().unwrap();
        assert!(manager.ledger().expenses.is_empty());

        let reopened = manager_in(temp.path());
        assert!(reopened.ledger().expenses.is_empty());
        assert_eq!(reopened.ledger().policy, PricingPolicy::DebtAmortization);
    }
}
