#![allow(dead_code)]

// tests/common/mod.rs
use wordroom_backend::db::txn_policy::{set_txn_policy, TxnPolicy};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    wordroom_test_support::logging::init();
}

// Each test owns a fresh in-memory database, so operations commit by default.
// `WORDROOM_TXN_POLICY=rollback` flips a whole binary to rollback-on-ok.
#[ctor::ctor]
fn init_txn_policy() {
    let policy = std::env::var("WORDROOM_TXN_POLICY")
        .ok()
        .and_then(|s| TxnPolicy::parse(&s))
        .unwrap_or(TxnPolicy::CommitOnOk);

    set_txn_policy(policy);
}
