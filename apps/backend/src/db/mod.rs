pub mod txn;
pub mod txn_policy;
