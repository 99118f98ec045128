//! User directory repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::users_sea as users_adapter;
use crate::entities::users;
use crate::errors::domain::{DomainError, NotFoundKind};

/// User domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<users::Model> for User {
    fn from(m: users::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
        }
    }
}

/// Public projection of a user: id and display name only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
}

impl From<users::Model> for UserSummary {
    fn from(m: users::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
        }
    }
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    email: &str,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, name, email).await?;
    Ok(User::from(user))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    find_by_id(conn, user_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::User, format!("User {user_id} not found"))
    })
}

pub async fn find_by_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    value: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_token(conn, value).await?;
    Ok(user.map(User::from))
}

pub async fn create_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    value: &str,
) -> Result<(), DomainError> {
    users_adapter::create_token(conn, user_id, value).await?;
    Ok(())
}

/// Display names keyed by user id; unknown ids are simply absent.
pub async fn names_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<HashMap<i64, String>, DomainError> {
    let users = users_adapter::find_by_ids(conn, ids).await?;
    Ok(users.into_iter().map(|u| (u.id, u.name)).collect())
}
