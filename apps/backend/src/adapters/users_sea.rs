//! SeaORM adapter for the user directory.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, NotSet, QueryFilter,
    QuerySelect, RelationTrait, Set,
};

use crate::entities::{user_tokens, users};

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    email: &str,
) -> Result<users::Model, sea_orm::DbErr> {
    users::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<Vec<users::Model>, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    users::Entity::find()
        .filter(users::Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await
}

/// Resolve a bearer value to its owner.
pub async fn find_by_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    value: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .join(JoinType::InnerJoin, users::Relation::UserTokens.def())
        .filter(user_tokens::Column::Value.eq(value))
        .one(conn)
        .await
}

pub async fn create_token<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    value: &str,
) -> Result<user_tokens::Model, sea_orm::DbErr> {
    user_tokens::ActiveModel {
        id: NotSet,
        user_id: Set(user_id),
        value: Set(value.to_string()),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}
