//! Teams nested under a room and their memberships.

use std::collections::HashMap;

use sea_orm::DatabaseTransaction;
use tracing::{debug, info, warn};

use crate::auth::Principal;
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::teams::{self, TeamMembership};
use crate::repos::rooms;
use crate::repos::users::UserSummary;
use crate::services::authz;
use crate::services::validation;
use crate::services::views::TeamView;

pub struct TeamCoordinator;

impl TeamCoordinator {
    pub fn new() -> Self {
        Self
    }

    /// Admin-only. The new team starts empty.
    pub async fn create_team(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
        name: &str,
    ) -> Result<TeamView, AppError> {
        let name = validation::team_name(name)?;
        authz::claim_admin(txn, room_id, principal).await?;

        let team = teams::create_team(txn, room_id, &name).await?;
        info!(room_id, team_id = team.id, user_id = principal.id, "team created");
        Ok(TeamView::new(team, Vec::new()))
    }

    /// Every team of the room with its members. Only visible to members.
    pub async fn list_teams(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
    ) -> Result<Vec<TeamView>, AppError> {
        rooms::require_room_shared(txn, room_id).await?;
        authz::require_member(txn, room_id, principal).await?;

        let room_teams = teams::list_for_room(txn, room_id).await?;
        let ids: Vec<i64> = room_teams.iter().map(|t| t.id).collect();

        let mut members: HashMap<i64, Vec<UserSummary>> = HashMap::new();
        for (team_id, member) in teams::members_of(txn, &ids).await? {
            members.entry(team_id).or_default().push(member);
        }

        debug!(room_id, count = room_teams.len(), "listed teams");
        Ok(room_teams
            .into_iter()
            .map(|team| {
                let team_members = members.remove(&team.id).unwrap_or_default();
                TeamView::new(team, team_members)
            })
            .collect())
    }

    /// Move the principal into `team_id`, dropping whatever team they held.
    pub async fn join_team(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        team_id: i64,
    ) -> Result<TeamMembership, AppError> {
        let team = teams::require_team_shared(txn, team_id).await?;
        authz::require_member(txn, team.room_id, principal).await?;

        let dropped = teams::delete_memberships_for_user(txn, principal.id).await?;
        let membership = match teams::create_membership(txn, team_id, principal.id).await {
            Ok(m) => m,
            Err(err @ DomainError::Conflict(..)) => {
                warn!(team_id, user_id = principal.id, "concurrent team join");
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        info!(
            room_id = team.room_id,
            team_id,
            user_id = principal.id,
            switched = dropped > 0,
            "joined team"
        );
        Ok(membership)
    }

    /// Fails NotFound when the principal is not on this team.
    pub async fn leave_team(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        team_id: i64,
    ) -> Result<(), AppError> {
        let removed = teams::delete_membership(txn, team_id, principal.id).await?;
        if removed == 0 {
            return Err(DomainError::not_found(
                NotFoundKind::TeamMembership,
                format!("Not a member of team {team_id}"),
            )
            .into());
        }
        info!(team_id, user_id = principal.id, "left team");
        Ok(())
    }

    /// Admin-only. Removes the team's memberships, then the team.
    pub async fn close_team(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        team_id: i64,
    ) -> Result<(), AppError> {
        let team = teams::require_team(txn, team_id).await?;
        authz::claim_admin(txn, team.room_id, principal).await?;

        let memberships = teams::delete_memberships_for_teams(txn, &[team_id]).await?;
        teams::delete_team(txn, team_id).await?;
        info!(
            room_id = team.room_id,
            team_id,
            user_id = principal.id,
            memberships,
            "team closed"
        );
        Ok(())
    }
}

impl Default for TeamCoordinator {
    fn default() -> Self {
        Self::new()
    }
}
