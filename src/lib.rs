#![doc(test(attr(deny(warnings))))]

//! Dukkan Core is the bookkeeping engine of a small mobile-phone shop:
//! sale transactions, supplier debt and stock, customer debts, operating
//! expenses, and settlements, persisted as JSON. Presentation is the
//! caller's concern; everything here is synchronous pure computation over
//! the record set.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Dukkan Core tracing initialized.");
    });
}
