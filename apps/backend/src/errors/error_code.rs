//! Error codes for the wordroom backend.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and are the strings callers see.

use core::fmt;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No principal could be resolved for the request
    Unauthenticated,
    /// Access denied
    Forbidden,
    /// Caller is not the room admin
    NotAdmin,
    /// Caller is not a member of the room
    NotAMember,
    /// Private room joined with a wrong or missing code
    InvalidInvitationCode,

    // Request Validation
    /// General validation error
    ValidationError,
    InvalidRoomName,
    InvalidTeamName,
    InvalidPoints,
    /// Admin tried to kick themselves
    CannotKickSelf,

    // Resource Not Found
    RoomNotFound,
    TeamNotFound,
    UserNotFound,
    /// Pause requested with no started round
    NoActiveRound,
    /// User is not in any team
    TeamMembershipNotFound,
    /// General not found error
    NotFound,
    /// Record not found (generic, DB-driven)
    RecordNotFound,

    // Business Logic Conflicts
    /// User already belongs to a room
    AlreadyInRoom,
    /// User already belongs to a team
    AlreadyInTeam,
    /// Room already has a round row
    RoundExists,
    UniqueEmail,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    /// Serializable transaction aborted; retryable
    SerializationFailure,
    /// Foreign key constraint violation (SQLSTATE 23503)
    FkViolation,
    /// Check constraint violation (SQLSTATE 23514)
    CheckViolation,

    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotAdmin => "NOT_ADMIN",
            Self::NotAMember => "NOT_A_MEMBER",
            Self::InvalidInvitationCode => "INVALID_INVITATION_CODE",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidRoomName => "INVALID_ROOM_NAME",
            Self::InvalidTeamName => "INVALID_TEAM_NAME",
            Self::InvalidPoints => "INVALID_POINTS",
            Self::CannotKickSelf => "CANNOT_KICK_SELF",

            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NoActiveRound => "NO_ACTIVE_ROUND",
            Self::TeamMembershipNotFound => "TEAM_MEMBERSHIP_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::AlreadyInRoom => "ALREADY_IN_ROOM",
            Self::AlreadyInTeam => "ALREADY_IN_TEAM",
            Self::RoundExists => "ROUND_EXISTS",
            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::SerializationFailure => "SERIALIZATION_FAILURE",
            Self::FkViolation => "FK_VIOLATION",
            Self::CheckViolation => "CHECK_VIOLATION",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
