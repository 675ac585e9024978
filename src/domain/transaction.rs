//! Domain model for sale transactions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::money::Amount;
use crate::domain::supplier::Network;

/// Customer name used when the form leaves the field blank.
pub const DEFAULT_CUSTOMER: &str = "walk-in";

/// What was sold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransactionKind {
    /// A bill paid on the customer's behalf.
    Bill,
    /// Prepaid airtime for a telecom network.
    Credit { network: Network },
    /// A phone accessory.
    Accessory,
}

impl TransactionKind {
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Credit { .. })
    }

    pub fn network(&self) -> Option<Network> {
        match self {
            TransactionKind::Credit { network } => Some(*network),
            _ => None,
        }
    }

    /// Whether the supplier is owed a share of this transaction under the
    /// derived-balance (percentage split) model.
    pub fn supplier_liable(&self) -> bool {
        matches!(self, TransactionKind::Bill | TransactionKind::Credit { .. })
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Bill => f.write_str("Bill"),
            TransactionKind::Credit { network } => write!(f, "Credit ({network})"),
            TransactionKind::Accessory => f.write_str("Accessory"),
        }
    }
}

/// One sale event. Pricing fields are fixed at creation time; only the
/// `debt_paid` and `supplier_paid` flags may change afterwards, and each
/// transitions false to true exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: TransactionKind,
    pub customer_name: String,
    pub sell_price: Amount,
    /// Supplier share for credit sales, capital cost otherwise.
    pub cost_price: Amount,
    pub profit: Amount,
    pub is_debt: bool,
    #[serde(default)]
    pub debt_paid: bool,
    #[serde(default)]
    pub supplier_paid: bool,
    /// Actual stock decrement of an amortized credit sale; kept so that
    /// deletion can restore the supplier book exactly.
    #[serde(default)]
    pub stock_drawn: Amount,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        customer_name: Option<String>,
        sell_price: Amount,
        cost_price: Amount,
        profit: Amount,
        is_debt: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            kind,
            customer_name: customer_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CUSTOMER.to_string()),
            sell_price,
            cost_price,
            profit,
            is_debt,
            debt_paid: false,
            supplier_paid: false,
            stock_drawn: 0,
        }
    }

    /// Whether the customer still owes for this sale.
    pub fn debt_outstanding(&self) -> bool {
        self.is_debt && !self.debt_paid
    }

    pub fn mark_debt_paid(&mut self) {
        self.debt_paid = true;
    }

    pub fn mark_supplier_paid(&mut self) {
        self.supplier_paid = true;
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} — {} ({})", self.kind, self.customer_name, self.sell_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_customer_name_falls_back_to_placeholder() {
        let txn = Transaction::new(TransactionKind::Bill, Some("  ".into()), 1_000, 800, 200, false);
        assert_eq!(txn.customer_name, DEFAULT_CUSTOMER);
        let named = Transaction::new(TransactionKind::Bill, Some("Abu Firas".into()), 1_000, 800, 200, false);
        assert_eq!(named.customer_name, "Abu Firas");
    }

    #[test]
    fn supplier_liability_covers_bills_and_credit() {
        assert!(TransactionKind::Bill.supplier_liable());
        assert!(TransactionKind::Credit { network: Network::Mtn }.supplier_liable());
        assert!(!TransactionKind::Accessory.supplier_liable());
    }

    #[test]
    fn display_label_names_kind_and_customer() {
        let txn = Transaction::new(
            TransactionKind::Credit { network: Network::Syriatel },
            Some("Abu Firas".into()),
            25_000,
            0,
            25_000,
            false,
        );
        assert_eq!(txn.display_label(), "Credit (Syriatel) — Abu Firas (25000)");
    }
}
