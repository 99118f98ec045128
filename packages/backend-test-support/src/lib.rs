//! Backend test support utilities
//!
//! Unified logging initialization for integration tests plus helpers for
//! generating unique test data.

pub mod logging;
pub mod unique_helpers;
