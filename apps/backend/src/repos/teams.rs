//! Team and team membership repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::team_memberships_sea as team_memberships_adapter;
use crate::adapters::teams_sea::{self as teams_adapter, TeamCreate};
use crate::entities::{team_memberships, teams};
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::users::UserSummary;

/// Team domain model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: i64,
    pub room_id: i64,
    pub name: String,
}

impl From<teams::Model> for Team {
    fn from(m: teams::Model) -> Self {
        Self {
            id: m.id,
            room_id: m.room_id,
            name: m.name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamMembership {
    pub id: i64,
    pub team_id: i64,
    pub user_id: i64,
}

impl From<team_memberships::Model> for TeamMembership {
    fn from(m: team_memberships::Model) -> Self {
        Self {
            id: m.id,
            team_id: m.team_id,
            user_id: m.user_id,
        }
    }
}

fn team_not_found(team_id: i64) -> DomainError {
    DomainError::not_found(NotFoundKind::Team, format!("Team {team_id} not found"))
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
    name: &str,
) -> Result<Team, DomainError> {
    let team = teams_adapter::create_team(conn, TeamCreate::new(room_id, name)).await?;
    Ok(Team::from(team))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<Team>, DomainError> {
    let team = teams_adapter::find_by_id(conn, team_id).await?;
    Ok(team.map(Team::from))
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Team, DomainError> {
    find_by_id(conn, team_id)
        .await?
        .ok_or_else(|| team_not_found(team_id))
}

/// Like [`require_team`], holding a shared row lock until commit.
pub async fn require_team_shared<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Team, DomainError> {
    teams_adapter::find_by_id_shared(conn, team_id)
        .await?
        .map(Team::from)
        .ok_or_else(|| team_not_found(team_id))
}

pub async fn list_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<Team>, DomainError> {
    let teams = teams_adapter::list_for_room(conn, room_id).await?;
    Ok(teams.into_iter().map(Team::from).collect())
}

pub async fn ids_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<Vec<i64>, DomainError> {
    Ok(teams_adapter::ids_for_room(conn, room_id).await?)
}

pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<u64, DomainError> {
    Ok(teams_adapter::delete_team(conn, team_id).await?)
}

pub async fn delete_for_room<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: i64,
) -> Result<u64, DomainError> {
    Ok(teams_adapter::delete_for_room(conn, room_id).await?)
}

// Team memberships

pub async fn create_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
) -> Result<TeamMembership, DomainError> {
    let m = team_memberships_adapter::create_membership(conn, team_id, user_id).await?;
    Ok(TeamMembership::from(m))
}

pub async fn find_membership_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<TeamMembership>, DomainError> {
    let m = team_memberships_adapter::find_by_user(conn, user_id).await?;
    Ok(m.map(TeamMembership::from))
}

/// `(team_id, member)` pairs for the given teams, grouped by team in join order.
pub async fn members_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_ids: &[i64],
) -> Result<Vec<(i64, UserSummary)>, DomainError> {
    let rows = team_memberships_adapter::list_with_users(conn, team_ids).await?;
    rows.into_iter()
        .map(|(m, user)| match user {
            Some(user) => Ok((m.team_id, UserSummary::from(user))),
            None => Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("team membership {} references a missing user", m.id),
            )),
        })
        .collect()
}

pub async fn delete_memberships_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, DomainError> {
    Ok(team_memberships_adapter::delete_for_user(conn, user_id).await?)
}

pub async fn delete_membership<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    user_id: i64,
) -> Result<u64, DomainError> {
    Ok(team_memberships_adapter::delete_membership(conn, team_id, user_id).await?)
}

pub async fn delete_memberships_for_user_in_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    team_ids: &[i64],
) -> Result<u64, DomainError> {
    Ok(team_memberships_adapter::delete_for_user_in_teams(conn, user_id, team_ids).await?)
}

pub async fn delete_memberships_for_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_ids: &[i64],
) -> Result<u64, DomainError> {
    Ok(team_memberships_adapter::delete_for_teams(conn, team_ids).await?)
}
