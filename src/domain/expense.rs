//! Operating expense entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::money::Amount;

/// Expense name used when the form leaves the field blank.
pub const DEFAULT_EXPENSE_NAME: &str = "general expense";

/// An operating cost entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub name: String,
    pub amount: Amount,
}

impl Expense {
    pub fn new(name: Option<String>, amount: Amount) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            name: name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_EXPENSE_NAME.to_string()),
            amount,
        }
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.amount)
    }
}
