use futures::future::BoxFuture;
use sea_orm::{DatabaseTransaction, TransactionTrait};
use tracing::debug;

use super::txn_policy;
use crate::error::AppError;
use crate::state::app_state::AppState;

/// Execute a function within one database transaction.
///
/// Begins at the state's isolation level, runs the closure, applies the
/// process [`txn_policy`] on `Ok`, and rolls back on `Err`. Every operation in
/// [`crate::api`] is exactly one call to this.
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> BoxFuture<'t, Result<R, AppError>> + Send,
    R: Send,
{
    let txn = state.db.begin_with_config(state.isolation, None).await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            txn_policy::TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            txn_policy::TxnPolicy::RollbackOnOk => {
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            debug!(code = %err.code(), "rolling back transaction");
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
