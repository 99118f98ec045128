//! Opaque bearer tokens stored in `user_tokens`.

use async_trait::async_trait;
use sea_orm::DatabaseTransaction;

use super::{Principal, PrincipalResolver};
use crate::error::AppError;
use crate::repos::users;

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenPrincipalResolver;

#[async_trait]
impl PrincipalResolver for TokenPrincipalResolver {
    async fn resolve(
        &self,
        txn: &DatabaseTransaction,
        credential: &str,
    ) -> Result<Option<Principal>, AppError> {
        let user = users::find_by_token(txn, credential).await?;
        Ok(user.map(Principal::from))
    }
}
