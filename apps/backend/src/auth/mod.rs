//! Principal resolution.
//!
//! Operations take an explicit [`Principal`]; they never see the credential it
//! was resolved from.

pub mod principal;
pub mod token_resolver;

pub use principal::Principal;
pub use token_resolver::TokenPrincipalResolver;

use async_trait::async_trait;
use sea_orm::DatabaseTransaction;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::logging::pii::Redacted;

/// Turns a bearer credential into a principal.
#[async_trait]
pub trait PrincipalResolver: Send + Sync {
    /// `Ok(None)` when the credential is unknown.
    async fn resolve(
        &self,
        txn: &DatabaseTransaction,
        credential: &str,
    ) -> Result<Option<Principal>, AppError>;
}

/// Resolve the caller or fail with `Unauthenticated`.
///
/// Accepts the raw header value; a `Bearer ` prefix is stripped if present.
pub async fn authenticate<R: PrincipalResolver + ?Sized>(
    resolver: &R,
    txn: &DatabaseTransaction,
    authorization: Option<&str>,
) -> Result<Principal, AppError> {
    let Some(raw) = authorization else {
        debug!("missing credential");
        return Err(AppError::Unauthenticated);
    };

    let credential = strip_bearer(raw);
    if credential.is_empty() {
        return Err(AppError::Unauthenticated);
    }

    match resolver.resolve(txn, credential).await? {
        Some(principal) => {
            debug!(user_id = principal.id, "principal resolved");
            Ok(principal)
        }
        None => {
            warn!(credential = %Redacted(raw), "unknown credential");
            Err(AppError::Unauthenticated)
        }
    }
}

/// A bare scheme with no value yields an empty credential.
fn strip_bearer(raw: &str) -> &str {
    let trimmed = raw.trim_start();
    let (scheme, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));
    if scheme.eq_ignore_ascii_case("bearer") {
        rest.trim()
    } else {
        trimmed.trim_end()
    }
}
