//! Serializable results returned by the coordinators.

use std::collections::HashMap;

use serde::Serialize;
use time::OffsetDateTime;

use crate::auth::Principal;
use crate::entities::rounds::RoundState;
use crate::repos::rooms::Room;
use crate::repos::rounds::Round;
use crate::repos::teams::Team;
use crate::repos::users::UserSummary;
use crate::services::authz;

/// A room as seen by one principal. `invitation_code` is only present for
/// the room's current admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomView {
    pub id: i64,
    pub name: String,
    pub creator: UserSummary,
    pub admin: UserSummary,
    pub is_private: bool,
    pub points_per_word: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invitation_code: Option<String>,
}

impl RoomView {
    /// Names missing from `names` render as empty strings.
    pub fn for_viewer(room: Room, viewer: &Principal, names: &HashMap<i64, String>) -> Self {
        let invitation_code = authz::is_admin(&room, viewer).then(|| room.invitation_code.clone());
        let summary = |id: i64| UserSummary {
            id,
            name: names.get(&id).cloned().unwrap_or_default(),
        };
        Self {
            id: room.id,
            creator: summary(room.creator_id),
            admin: summary(room.admin_id),
            name: room.name,
            is_private: room.is_private,
            points_per_word: room.points_per_word,
            invitation_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinResult {
    pub room_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamView {
    pub id: i64,
    pub room_id: i64,
    pub name: String,
    /// In join order.
    pub members: Vec<UserSummary>,
}

impl TeamView {
    pub fn new(team: Team, members: Vec<UserSummary>) -> Self {
        Self {
            id: team.id,
            room_id: team.room_id,
            name: team.name,
            members,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundView {
    pub id: i64,
    pub room_id: i64,
    pub state: RoundState,
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
}

impl From<Round> for RoundView {
    fn from(r: Round) -> Self {
        Self {
            id: r.id,
            room_id: r.room_id,
            state: r.state,
            start_time: r.start_time,
            end_time: r.end_time,
        }
    }
}
