//! Room lifecycle: creation, settings, joining and leaving, admin transfer
//! and close.

use sea_orm::DatabaseTransaction;
use tracing::{debug, info, warn};

use crate::auth::Principal;
use crate::error::AppError;
use crate::errors::domain::{DomainError, ForbiddenKind, ValidationKind};
use crate::logging::pii::MaskedCode;
use crate::repos::rooms::{self, Room, RoomCreate, RoomSettings};
use crate::repos::{memberships, teams, users};
use crate::services::authz;
use crate::services::cascade::{CascadeDeletionOrchestrator, TeardownReport};
use crate::services::validation;
use crate::services::views::{JoinResult, RoomView};
use crate::utils::invitation_code::generate_invitation_code;

pub struct RoomRegistry;

impl RoomRegistry {
    pub fn new() -> Self {
        Self
    }

    async fn view(
        &self,
        txn: &DatabaseTransaction,
        room: Room,
        viewer: &Principal,
    ) -> Result<RoomView, AppError> {
        let names = users::names_by_id(txn, &[room.creator_id, room.admin_id]).await?;
        Ok(RoomView::for_viewer(room, viewer, &names))
    }

    /// Create a room with the principal as creator and admin.
    pub async fn create(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        name: &str,
        is_private: bool,
    ) -> Result<RoomView, AppError> {
        let name = validation::room_name(name)?;
        let code = generate_invitation_code();

        let room = rooms::create_room(
            txn,
            RoomCreate::new(name, principal.id, code).private(is_private),
        )
        .await?;

        info!(
            room_id = room.id,
            user_id = principal.id,
            is_private,
            invitation_code = %MaskedCode(&room.invitation_code),
            "room created"
        );
        self.view(txn, room, principal).await
    }

    /// Public rooms ordered by id, each redacted for the viewer.
    pub async fn list_public(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
    ) -> Result<Vec<RoomView>, AppError> {
        let rooms = rooms::list_public(txn).await?;

        let mut ids: Vec<i64> = rooms
            .iter()
            .flat_map(|r| [r.creator_id, r.admin_id])
            .collect();
        ids.sort_unstable();
        ids.dedup();
        let names = users::names_by_id(txn, &ids).await?;

        debug!(count = rooms.len(), "listed public rooms");
        Ok(rooms
            .into_iter()
            .map(|room| RoomView::for_viewer(room, principal, &names))
            .collect())
    }

    /// Overwrite name, privacy and points in one admin-guarded write.
    pub async fn update(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
        name: &str,
        is_private: bool,
        points_per_word: i32,
    ) -> Result<RoomView, AppError> {
        let settings = RoomSettings {
            name: validation::room_name(name)?,
            is_private,
            points_per_word: validation::points_per_word(points_per_word)?,
        };

        let room = match rooms::update_settings(txn, room_id, principal.id, settings).await {
            Ok(room) => room,
            Err(err @ DomainError::Forbidden(..)) => {
                warn!(room_id, user_id = principal.id, "admin check denied");
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        info!(room_id, user_id = principal.id, "room settings updated");
        self.view(txn, room, principal).await
    }

    /// Join a room. Users hold at most one room membership at a time, so a
    /// second join anywhere is a Conflict.
    pub async fn join(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
        invitation_code: Option<&str>,
    ) -> Result<JoinResult, AppError> {
        let room = rooms::require_room_shared(txn, room_id).await?;

        if !authz::can_join(&room, invitation_code) {
            warn!(
                room_id,
                user_id = principal.id,
                supplied = %MaskedCode(invitation_code.unwrap_or_default()),
                "invitation code rejected"
            );
            return Err(DomainError::forbidden(
                ForbiddenKind::InvalidInvitationCode,
                "Invitation code does not match",
            )
            .into());
        }

        match memberships::create_membership(txn, room_id, principal.id).await {
            Ok(m) => {
                info!(room_id, user_id = principal.id, "joined room");
                Ok(JoinResult {
                    room_id: m.room_id,
                    user_id: m.user_id,
                })
            }
            Err(err @ DomainError::Conflict(..)) => {
                warn!(room_id, user_id = principal.id, "already in a room");
                Err(err.into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Leave a room along with any team held in it. Silent when not a member.
    pub async fn leave(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
    ) -> Result<(), AppError> {
        let removed = remove_participant(txn, room_id, principal.id).await?;
        if removed {
            info!(room_id, user_id = principal.id, "left room");
        } else {
            debug!(room_id, user_id = principal.id, "leave without membership");
        }
        Ok(())
    }

    /// Close the room and tear down everything it owns.
    pub async fn close(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
    ) -> Result<TeardownReport, AppError> {
        authz::claim_admin(txn, room_id, principal).await?;

        let report = CascadeDeletionOrchestrator::new()
            .teardown(txn, room_id)
            .await?;
        info!(room_id, user_id = principal.id, "room closed");
        Ok(report)
    }

    /// Remove another participant. Silent when the target was not a member.
    pub async fn kick(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
        target_user_id: i64,
    ) -> Result<(), AppError> {
        authz::claim_admin(txn, room_id, principal).await?;

        if target_user_id == principal.id {
            return Err(DomainError::validation(
                ValidationKind::CannotKickSelf,
                "The admin cannot kick themselves; leave the room instead",
            )
            .into());
        }

        let removed = remove_participant(txn, room_id, target_user_id).await?;
        info!(
            room_id,
            user_id = principal.id,
            target_user_id,
            removed,
            "participant kicked"
        );
        Ok(())
    }

    /// Hand admin rights to another existing user.
    pub async fn pass_admin_status(
        &self,
        txn: &DatabaseTransaction,
        principal: &Principal,
        room_id: i64,
        new_admin_id: i64,
    ) -> Result<RoomView, AppError> {
        authz::claim_admin(txn, room_id, principal).await?;
        users::require_user(txn, new_admin_id).await?;

        let room = rooms::set_admin(txn, room_id, principal.id, new_admin_id).await?;
        info!(
            room_id,
            user_id = principal.id,
            new_admin_id,
            "admin status transferred"
        );
        self.view(txn, room, principal).await
    }
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop a user's team membership in the room, then the room membership.
/// Returns whether a room membership existed.
async fn remove_participant(
    txn: &DatabaseTransaction,
    room_id: i64,
    user_id: i64,
) -> Result<bool, AppError> {
    let team_ids = teams::ids_for_room(txn, room_id).await?;
    teams::delete_memberships_for_user_in_teams(txn, user_id, &team_ids).await?;
    let removed = memberships::delete_membership(txn, room_id, user_id).await?;
    Ok(removed > 0)
}
