//! Supplier-side operations: stock intake, balance, and settlement.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::ledger::Ledger;
use crate::domain::money::Amount;
use crate::domain::policy::PricingPolicy;
use crate::domain::settlement::SupplierSettlement;
use crate::domain::supplier::Network;

pub struct SupplierService;

impl SupplierService {
    /// Current balance owed to the supplier.
    ///
    /// Under the percentage split this is derived from unsettled
    /// supplier-liable transactions; under amortization it reads the
    /// per-network debt accumulators.
    pub fn balance(ledger: &Ledger) -> Amount {
        match &ledger.policy {
            PricingPolicy::PercentageSplit { .. } => ledger
                .transactions
                .iter()
                .filter(|txn| txn.kind.supplier_liable() && !txn.supplier_paid)
                .map(|txn| txn.cost_price)
                .sum(),
            PricingPolicy::DebtAmortization => ledger.supplier.total_debt(),
        }
    }

    /// Balance owed for a single network. Zero under the percentage
    /// split, which tracks one undivided balance.
    pub fn network_balance(ledger: &Ledger, network: Network) -> Amount {
        match &ledger.policy {
            PricingPolicy::PercentageSplit { .. } => 0,
            PricingPolicy::DebtAmortization => ledger.supplier.account(network).debt,
        }
    }

    /// Books supplier-fronted stock for a network: debt grows by the
    /// supplier markup, sellable stock by the resale markup. Only
    /// meaningful under the amortization policy.
    pub fn receive_stock(
        ledger: &mut Ledger,
        network: Network,
        purchase: Amount,
    ) -> ServiceResult<()> {
        if !ledger.policy.is_amortizing() {
            return Err(ServiceError::Invalid(
                "stock intake requires the debt amortization policy".into(),
            ));
        }
        if purchase < 0 {
            return Err(ServiceError::Invalid("purchase amount must not be negative".into()));
        }
        if purchase == 0 {
            return Ok(());
        }
        let account = ledger.supplier.account_mut(network);
        account.receive(purchase);
        tracing::info!(
            %network,
            purchase,
            debt = account.debt,
            stock = account.stock,
            "received supplier stock"
        );
        ledger.touch();
        Ok(())
    }

    /// Clears the balance owed to the supplier, recording a settlement.
    ///
    /// `network` restricts an amortizing settlement to one network's
    /// debt; `None` clears everything. A zero (or negative) balance is an
    /// idempotent no-op and returns `None`.
    pub fn settle(
        ledger: &mut Ledger,
        network: Option<Network>,
        note: Option<&str>,
    ) -> ServiceResult<Option<Uuid>> {
        let cleared = match &ledger.policy {
            PricingPolicy::PercentageSplit { .. } => {
                let balance = Self::balance(ledger);
                if balance <= 0 {
                    return Ok(None);
                }
                for txn in ledger
                    .transactions
                    .iter_mut()
                    .filter(|txn| txn.kind.supplier_liable() && !txn.supplier_paid)
                {
                    txn.mark_supplier_paid();
                }
                balance
            }
            PricingPolicy::DebtAmortization => {
                let networks: &[Network] = match &network {
                    Some(network) => std::slice::from_ref(network),
                    None => &Network::ALL,
                };
                let cleared: Amount = networks
                    .iter()
                    .map(|network| ledger.supplier.account_mut(*network).clear_debt())
                    .sum();
                if cleared <= 0 {
                    return Ok(None);
                }
                cleared
            }
        };
        tracing::info!(cleared, "settled supplier balance");
        let settlement = SupplierSettlement::new(cleared, note);
        Ok(Some(ledger.add_settlement(settlement)))
    }
}
