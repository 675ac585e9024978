//! Business logic for recording and managing sale transactions.

use uuid::Uuid;

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::ledger::Ledger;
use crate::domain::money::{share, Amount};
use crate::domain::policy::PricingPolicy;
use crate::domain::transaction::{Transaction, TransactionKind};

/// Input for a new sale, before pricing has been applied.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub customer_name: Option<String>,
    pub sell_price: Amount,
    /// Capital cost for bills and accessories. Ignored for credit sales,
    /// whose supplier share is computed by the active policy.
    pub cost_price: Option<Amount>,
    pub is_debt: bool,
}

impl TransactionDraft {
    pub fn new(kind: TransactionKind, sell_price: Amount) -> Self {
        Self {
            kind,
            customer_name: None,
            sell_price,
            cost_price: None,
            is_debt: false,
        }
    }

    pub fn customer(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    pub fn cost(mut self, cost_price: Amount) -> Self {
        self.cost_price = Some(cost_price);
        self
    }

    pub fn as_debt(mut self) -> Self {
        self.is_debt = true;
        self
    }
}

/// Provides validated operations over ledger transactions.
pub struct TransactionService;

impl TransactionService {
    /// Prices and records a new sale, returning its identifier.
    ///
    /// Credit sales under the amortization policy draw down the network's
    /// stock and pay the supplier debt before any proceeds count as
    /// profit; the consumed amounts are kept on the transaction so that
    /// [`remove`](Self::remove) can restore them.
    pub fn record(ledger: &mut Ledger, draft: TransactionDraft) -> ServiceResult<Uuid> {
        if draft.sell_price < 0 {
            return Err(ServiceError::Invalid("sell price must not be negative".into()));
        }
        if matches!(draft.cost_price, Some(cost) if cost < 0) {
            return Err(ServiceError::Invalid("cost price must not be negative".into()));
        }

        let mut stock_drawn = 0;
        let (cost, profit) = match (draft.kind, &ledger.policy) {
            (TransactionKind::Bill | TransactionKind::Accessory, _) => {
                let cost = draft.cost_price.unwrap_or(0);
                (cost, draft.sell_price - cost)
            }
            (
                TransactionKind::Credit { .. },
                PricingPolicy::PercentageSplit { cost_rate, profit_rate },
            ) => (
                share(draft.sell_price, *cost_rate),
                share(draft.sell_price, *profit_rate),
            ),
            (TransactionKind::Credit { network }, PricingPolicy::DebtAmortization) => {
                let account = ledger.supplier.account_mut(network);
                let (applied, drawn) = account.apply_sale(draft.sell_price);
                stock_drawn = drawn;
                (applied, draft.sell_price - applied)
            }
        };

        let mut txn = Transaction::new(
            draft.kind,
            draft.customer_name,
            draft.sell_price,
            cost,
            profit,
            draft.is_debt,
        );
        txn.stock_drawn = stock_drawn;
        tracing::debug!(
            kind = %txn.kind,
            sell = txn.sell_price,
            cost = txn.cost_price,
            profit = txn.profit,
            "recorded transaction"
        );
        Ok(ledger.add_transaction(txn))
    }

    /// Marks an outstanding customer debt as paid. Idempotent; a cash
    /// sale is left untouched.
    pub fn mark_debt_paid(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let txn = ledger
            .transaction_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        if txn.is_debt && !txn.debt_paid {
            txn.mark_debt_paid();
            ledger.touch();
        }
        Ok(())
    }

    /// Removes a transaction, returning the removed instance.
    ///
    /// Removal reverses what the sale did to the supplier book: an
    /// amortized credit sale puts back exactly the debt it paid and the
    /// stock it drew.
    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<Transaction> {
        let removed = ledger
            .remove_transaction(id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        if let (TransactionKind::Credit { network }, PricingPolicy::DebtAmortization) =
            (removed.kind, &ledger.policy)
        {
            ledger
                .supplier
                .account_mut(network)
                .restore_sale(removed.cost_price, removed.stock_drawn);
        }
        tracing::debug!(id = %removed.id, "removed transaction");
        Ok(removed)
    }

    /// Returns a snapshot of the ledger's transactions, newest first.
    pub fn list(ledger: &Ledger) -> Vec<&Transaction> {
        ledger.transactions.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::supplier::Network;

    fn amortizing_ledger() -> Ledger {
        Ledger::new("Shop", PricingPolicy::DebtAmortization)
    }

    #[test]
    fn accessory_profit_is_margin_over_cost() {
        let mut ledger = amortizing_ledger();
        let id = TransactionService::record(
            &mut ledger,
            TransactionDraft::new(TransactionKind::Accessory, 50_000).cost(30_000),
        )
        .unwrap();
        let txn = ledger.transaction(id).unwrap();
        assert_eq!(txn.profit, 20_000);
        assert_eq!(txn.cost_price, 30_000);
    }

    #[test]
    fn negative_sell_price_is_rejected() {
        let mut ledger = amortizing_ledger();
        let err = TransactionService::record(
            &mut ledger,
            TransactionDraft::new(TransactionKind::Bill, -1),
        )
        .expect_err("negative amount must fail");
        assert!(matches!(err, ServiceError::Invalid(_)));
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn percentage_split_uses_configured_rates() {
        let mut ledger = Ledger::new("Shop", PricingPolicy::percentage_split());
        let id = TransactionService::record(
            &mut ledger,
            TransactionDraft::new(
                TransactionKind::Credit { network: Network::Mtn },
                100_000,
            ),
        )
        .unwrap();
        let txn = ledger.transaction(id).unwrap();
        assert_eq!(txn.cost_price, 7_000);
        assert_eq!(txn.profit, 13_000);
    }

    #[test]
    fn malformed_form_input_surfaces_as_invalid() {
        let err: ServiceError = crate::domain::money::parse_amount("12k")
            .expect_err("garbage must not parse")
            .into();
        assert!(matches!(err, ServiceError::Invalid(_)));
    }

    #[test]
    fn mark_debt_paid_fails_for_missing_transaction() {
        let mut ledger = amortizing_ledger();
        let err = TransactionService::mark_debt_paid(&mut ledger, Uuid::new_v4())
            .expect_err("unknown id must fail");
        assert!(matches!(err, ServiceError::Invalid(ref message) if message.contains("not found")));
    }
}
