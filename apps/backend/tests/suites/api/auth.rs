use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use wordroom_backend::api;
use wordroom_backend::entities::user_tokens;
use wordroom_backend::error::AppError;
use wordroom_backend::errors::ErrorCode;
use wordroom_backend::repos::users;
use wordroom_backend::TokenPrincipalResolver;

use crate::support::{create_principal, create_principal_with_token, test_state};

#[tokio::test]
async fn bearer_tokens_resolve_to_their_user() -> Result<(), AppError> {
    let state = test_state().await;
    let (alice, token) = create_principal_with_token(state.db(), "alice").await?;

    let header = format!("Bearer {token}");
    let resolved = api::authenticate(&state, &TokenPrincipalResolver, Some(header.as_str())).await?;
    assert_eq!(resolved, alice);

    let bare = api::authenticate(&state, &TokenPrincipalResolver, Some(token.as_str())).await?;
    assert_eq!(bare.id, alice.id);
    Ok(())
}

#[tokio::test]
async fn missing_or_unknown_credentials_are_unauthenticated() -> Result<(), AppError> {
    let state = test_state().await;
    create_principal_with_token(state.db(), "alice").await?;

    for header in [None, Some(""), Some("Bearer "), Some("Bearer not-a-token")] {
        let err = api::authenticate(&state, &TokenPrincipalResolver, header)
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Unauthenticated, "header {header:?}");
        assert_eq!(err.code(), ErrorCode::Unauthenticated);
        assert_eq!(err.status(), 401);
    }
    Ok(())
}

#[tokio::test]
async fn bare_scheme_never_matches_a_token_spelled_like_it() -> Result<(), AppError> {
    let state = test_state().await;
    let alice = create_principal(state.db(), "alice").await?;
    users::create_token(state.db(), alice.id, "Bearer").await?;

    for header in ["Bearer ", "Bearer", "  bearer  "] {
        let err = api::authenticate(&state, &TokenPrincipalResolver, Some(header))
            .await
            .unwrap_err();
        assert_eq!(err, AppError::Unauthenticated, "header {header:?}");
    }

    let resolved =
        api::authenticate(&state, &TokenPrincipalResolver, Some("Bearer Bearer")).await?;
    assert_eq!(resolved.id, alice.id);

    user_tokens::Entity::delete_many()
        .filter(user_tokens::Column::Value.eq("Bearer"))
        .exec(state.db())
        .await
        .map_err(AppError::from)?;
    Ok(())
}
