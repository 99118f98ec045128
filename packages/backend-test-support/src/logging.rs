//! Test logging shared by unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Used when no override is set. SQL layers stay quiet unless asked for.
pub const DEFAULT_TEST_FILTER: &str = "warn,sqlx=error,sea_orm=error";

/// Filter directives for test output.
///
/// First non-empty of `WORDROOM_TEST_LOG`, `TEST_LOG`, `RUST_LOG`, falling
/// back to [`DEFAULT_TEST_FILTER`].
pub fn filter_directives() -> String {
    ["WORDROOM_TEST_LOG", "TEST_LOG", "RUST_LOG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_TEST_FILTER.to_string())
}

/// Install the test subscriber once per process. Safe to call from every test.
///
/// An unparseable directive string falls back to the default filter rather
/// than aborting the run.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_new(filter_directives())
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(true)
            .try_init()
            .ok();
    });
}
