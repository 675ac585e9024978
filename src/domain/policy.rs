//! Pricing policy variants for credit sales.
//!
//! The shop's accounting rules changed across iterations of the original
//! system; both survive here as configuration variants of one interface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Default supplier share of a credit sale under the percentage split.
pub const SPLIT_COST_RATE: f64 = 0.07;
/// Default shop share of a credit sale under the percentage split.
pub const SPLIT_PROFIT_RATE: f64 = 0.13;

/// How a credit sale is priced and how the supplier balance is tracked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum PricingPolicy {
    /// Fixed percentage split: the supplier takes `cost_rate` of each
    /// credit sale, the shop keeps `profit_rate`. Supplier balance is
    /// derived from unsettled transactions.
    PercentageSplit {
        #[serde(default = "default_cost_rate")]
        cost_rate: f64,
        #[serde(default = "default_profit_rate")]
        profit_rate: f64,
    },
    /// Supplier fronts stock on credit per network; sale proceeds pay the
    /// running debt before any of them count as profit.
    DebtAmortization,
}

impl PricingPolicy {
    pub fn percentage_split() -> Self {
        PricingPolicy::PercentageSplit {
            cost_rate: SPLIT_COST_RATE,
            profit_rate: SPLIT_PROFIT_RATE,
        }
    }

    pub fn is_amortizing(&self) -> bool {
        matches!(self, PricingPolicy::DebtAmortization)
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy::DebtAmortization
    }
}

impl fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PricingPolicy::PercentageSplit { .. } => "Percentage Split",
            PricingPolicy::DebtAmortization => "Debt Amortization",
        };
        f.write_str(label)
    }
}

fn default_cost_rate() -> f64 {
    SPLIT_COST_RATE
}

fn default_profit_rate() -> f64 {
    SPLIT_PROFIT_RATE
}
