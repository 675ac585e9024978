//! Per-network supplier accounts: running debt owed to the supplier and
//! remaining sellable airtime stock.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::money::{share, Amount};

/// Markup applied to a stock purchase when it is booked as supplier debt.
pub const DEBT_MARKUP: f64 = 1.07;
/// Markup applied to a stock purchase when it is booked as sellable stock.
pub const STOCK_MARKUP: f64 = 1.20;

/// Telecom network whose airtime the shop resells.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Network {
    Mtn,
    Syriatel,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Mtn, Network::Syriatel];
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Network::Mtn => "MTN",
            Network::Syriatel => "Syriatel",
        };
        f.write_str(label)
    }
}

/// Running balances for one network: what the shop owes the supplier and
/// how much sellable airtime remains. Both stay non-negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkAccount {
    pub debt: Amount,
    pub stock: Amount,
}

impl NetworkAccount {
    /// Books a stock purchase fronted by the supplier: debt grows by the
    /// supplier markup, stock by the resale markup.
    pub fn receive(&mut self, purchase: Amount) {
        self.debt += share(purchase, DEBT_MARKUP);
        self.stock += share(purchase, STOCK_MARKUP);
    }

    /// Applies a credit sale. Stock is drawn down (floored at zero) and
    /// sale proceeds pay debt before counting as profit.
    ///
    /// Returns `(applied, drawn)`: the portion of the sale that reduced
    /// debt and the actual stock decrement.
    pub fn apply_sale(&mut self, sell: Amount) -> (Amount, Amount) {
        let drawn = sell.min(self.stock);
        self.stock -= drawn;
        let applied = sell.min(self.debt);
        self.debt -= applied;
        (applied, drawn)
    }

    /// Reverses a previously applied sale, restoring the exact debt and
    /// stock it consumed.
    pub fn restore_sale(&mut self, applied: Amount, drawn: Amount) {
        self.debt += applied;
        self.stock += drawn;
    }

    /// Zeroes the outstanding debt, returning the amount cleared.
    pub fn clear_debt(&mut self) -> Amount {
        std::mem::take(&mut self.debt)
    }
}

/// The supplier debt ledger: one account per network.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupplierBook {
    #[serde(default)]
    pub mtn: NetworkAccount,
    #[serde(default)]
    pub syriatel: NetworkAccount,
}

impl SupplierBook {
    pub fn account(&self, network: Network) -> &NetworkAccount {
        match network {
            Network::Mtn => &self.mtn,
            Network::Syriatel => &self.syriatel,
        }
    }

    pub fn account_mut(&mut self, network: Network) -> &mut NetworkAccount {
        match network {
            Network::Mtn => &mut self.mtn,
            Network::Syriatel => &mut self.syriatel,
        }
    }

    /// Total owed to the supplier across all networks.
    pub fn total_debt(&self) -> Amount {
        Network::ALL
            .iter()
            .map(|network| self.account(*network).debt)
            .sum()
    }

    /// Total sellable stock across all networks.
    pub fn total_stock(&self) -> Amount {
        Network::ALL
            .iter()
            .map(|network| self.account(*network).stock)
            .sum()
    }
}
