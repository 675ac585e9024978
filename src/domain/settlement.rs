//! Supplier settlement records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::money::Amount;

/// Note attached to a settlement when the caller does not supply one.
pub const DEFAULT_SETTLEMENT_NOTE: &str = "supplier account cleared";

/// A lump-sum payment that cleared the balance owed to the supplier at a
/// point in time. Append-only; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SupplierSettlement {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub amount: Amount,
    pub note: String,
}

impl SupplierSettlement {
    pub fn new(amount: Amount, note: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Utc::now(),
            amount,
            note: note
                .map(str::trim)
                .filter(|note| !note.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_SETTLEMENT_NOTE.to_string()),
        }
    }
}

impl Identifiable for SupplierSettlement {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for SupplierSettlement {
    fn display_label(&self) -> String {
        format!("settlement of {} — {}", self.amount, self.note)
    }
}
