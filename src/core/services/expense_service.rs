//! Business logic for operating expenses.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::expense::Expense;
use crate::domain::ledger::Ledger;
use crate::domain::money::Amount;

pub struct ExpenseService;

impl ExpenseService {
    /// Records an operating expense and returns its identifier.
    pub fn record(
        ledger: &mut Ledger,
        name: Option<String>,
        amount: Amount,
    ) -> ServiceResult<Uuid> {
        if amount < 0 {
            return Err(ServiceError::Invalid("expense amount must not be negative".into()));
        }
        let expense = Expense::new(name, amount);
        tracing::debug!(name = %expense.name, amount, "recorded expense");
        Ok(ledger.add_expense(expense))
    }

    /// Removes an expense, returning the removed instance.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Expense> {
        ledger
            .remove_expense(id)
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))
    }

    pub fn list(ledger: &Ledger) -> Vec<&Expense> {
        ledger.expenses.iter().collect()
    }
}
