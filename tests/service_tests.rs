mod common;

use common::setup_test_env;
use dukkan_core::{
    config::Config,
    core::services::{
        ExpenseBasis, ExpenseService, SummaryService, SupplierService, TransactionDraft,
        TransactionService,
    },
    domain::{
        policy::PricingPolicy, settlement::DEFAULT_SETTLEMENT_NOTE, supplier::Network,
        transaction::TransactionKind,
    },
};

#[test]
fn full_session_flow_survives_reopen() {
    let (mut manager, _config) = setup_test_env(PricingPolicy::DebtAmortization);

    manager
        .mutate(|ledger| SupplierService::receive_stock(ledger, Network::Mtn, 100_000))
        .unwrap();
    manager
        .mutate(|ledger| {
            TransactionService::record(
                ledger,
                TransactionDraft::new(TransactionKind::Credit { network: Network::Mtn }, 50_000),
            )
        })
        .unwrap();
    manager
        .mutate(|ledger| {
            TransactionService::record(
                ledger,
                TransactionDraft::new(TransactionKind::Accessory, 50_000).cost(30_000),
            )
        })
        .unwrap();
    manager
        .mutate(|ledger| ExpenseService::record(ledger, Some("electricity".into()), 4_000))
        .unwrap();

    let summary = SummaryService::summarize(manager.ledger());
    assert_eq!(summary.supplier_balance, 57_000);
    assert_eq!(summary.gross_profit, 20_000);
    assert_eq!(summary.operating_expenses, 4_000);
    assert_eq!(summary.net_profit, 16_000);
    assert_eq!(
        SummaryService::total_expenses(manager.ledger(), ExpenseBasis::IncludeCapital),
        34_000
    );

    manager.reload().unwrap();
    let summary = SummaryService::summarize(manager.ledger());
    assert_eq!(summary.supplier_balance, 57_000);
    assert_eq!(summary.net_profit, 16_000);
}

#[test]
fn failed_validation_does_not_persist_anything() {
    let (mut manager, _config) = setup_test_env(PricingPolicy::DebtAmortization);

    let result = manager.mutate(|ledger| {
        TransactionService::record(ledger, TransactionDraft::new(TransactionKind::Bill, -500))
    });
    assert!(result.is_err());

    manager.reload().unwrap();
    assert_eq!(manager.ledger().transaction_count(), 0);
}

#[test]
fn reset_wipes_all_records() {
    let (mut manager, _config) = setup_test_env(PricingPolicy::DebtAmortization);
    manager
        .mutate(|ledger| SupplierService::receive_stock(ledger, Network::Syriatel, 25_000))
        .unwrap();
    manager
        .mutate(|ledger| ExpenseService::record(ledger, None, 1_000))
        .unwrap();

    manager.reset().unwrap();
    let ledger = manager.ledger();
    assert!(ledger.transactions.is_empty());
    assert!(ledger.expenses.is_empty());
    assert!(ledger.settlements.is_empty());
    assert_eq!(ledger.supplier.total_debt(), 0);

    manager.reload().unwrap();
    assert!(manager.ledger().expenses.is_empty());
}

#[test]
fn settlement_history_records_each_clearing() {
    let (mut manager, _config) = setup_test_env(PricingPolicy::DebtAmortization);
    manager
        .mutate(|ledger| SupplierService::receive_stock(ledger, Network::Mtn, 10_000))
        .unwrap();
    manager
        .mutate(|ledger| SupplierService::settle(ledger, None, None).map(|_| ()))
        .unwrap();
    manager
        .mutate(|ledger| SupplierService::receive_stock(ledger, Network::Mtn, 20_000))
        .unwrap();
    manager
        .mutate(|ledger| SupplierService::settle(ledger, None, Some("month end")).map(|_| ()))
        .unwrap();

    let settlements = &manager.ledger().settlements;
    assert_eq!(settlements.len(), 2);
    // Newest first.
    assert_eq!(settlements[0].amount, 21_400);
    assert_eq!(settlements[0].note, "month end");
    assert_eq!(settlements[1].amount, 10_700);
    assert_eq!(settlements[1].note, DEFAULT_SETTLEMENT_NOTE);
}

#[test]
fn config_policy_drives_new_ledgers() {
    let (_manager, config_manager) = setup_test_env(PricingPolicy::DebtAmortization);

    let mut config = config_manager.load().unwrap();
    assert_eq!(config.policy, PricingPolicy::DebtAmortization);

    config.policy = PricingPolicy::percentage_split();
    config.last_opened_ledger = Some("shop".into());
    config_manager.save(&config).unwrap();

    let reloaded: Config = config_manager.load().unwrap();
    assert_eq!(reloaded.policy, PricingPolicy::percentage_split());
    assert_eq!(reloaded.last_opened_ledger.as_deref(), Some("shop"));
}
