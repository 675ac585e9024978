//! Derived aggregates over the record set.
//!
//! Everything here is a pure function of the ledger, recomputed on each
//! query. Results do not depend on transaction ordering.

use crate::core::services::SupplierService;
use crate::domain::ledger::Ledger;
use crate::domain::money::Amount;

/// Which costs count towards total expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseBasis {
    /// Operating expenses only.
    OperatingOnly,
    /// Operating expenses plus the capital cost of goods sold outside the
    /// supplier credit stream (bills and accessories).
    IncludeCapital,
}

/// Point-in-time snapshot of the derived figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerSummary {
    pub supplier_balance: Amount,
    pub customer_debt: Amount,
    pub gross_profit: Amount,
    pub operating_expenses: Amount,
    pub capital_costs: Amount,
    pub net_profit: Amount,
}

pub struct SummaryService;

impl SummaryService {
    pub fn summarize(ledger: &Ledger) -> LedgerSummary {
        LedgerSummary {
            supplier_balance: SupplierService::balance(ledger),
            customer_debt: Self::customer_debt(ledger),
            gross_profit: Self::gross_profit(ledger),
            operating_expenses: Self::operating_expenses(ledger),
            capital_costs: Self::capital_costs(ledger),
            net_profit: Self::net_profit(ledger),
        }
    }

    /// Total still owed by customers who bought on credit.
    pub fn customer_debt(ledger: &Ledger) -> Amount {
        ledger
            .transactions
            .iter()
            .filter(|txn| txn.debt_outstanding())
            .map(|txn| txn.sell_price)
            .sum()
    }

    /// Sum of per-transaction profit as fixed at creation time.
    pub fn gross_profit(ledger: &Ledger) -> Amount {
        ledger.transactions.iter().map(|txn| txn.profit).sum()
    }

    pub fn operating_expenses(ledger: &Ledger) -> Amount {
        ledger.expenses.iter().map(|expense| expense.amount).sum()
    }

    /// Capital tied up in bills and accessories (their cost price).
    pub fn capital_costs(ledger: &Ledger) -> Amount {
        ledger
            .transactions
            .iter()
            .filter(|txn| !txn.kind.is_credit())
            .map(|txn| txn.cost_price)
            .sum()
    }

    pub fn total_expenses(ledger: &Ledger, basis: ExpenseBasis) -> Amount {
        match basis {
            ExpenseBasis::OperatingOnly => Self::operating_expenses(ledger),
            ExpenseBasis::IncludeCapital => {
                Self::operating_expenses(ledger) + Self::capital_costs(ledger)
            }
        }
    }

    /// Gross profit minus operating expenses. Capital cost is already
    /// netted into each transaction's profit and is not subtracted again.
    pub fn net_profit(ledger: &Ledger) -> Amount {
        Self::gross_profit(ledger) - Self::operating_expenses(ledger)
    }
}
