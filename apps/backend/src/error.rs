use sea_orm::DbErr;
use thiserror::Error;

use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::infra::db_errors::map_db_err;

/// Outward error of every operation.
///
/// Exactly one of these is returned on failure; nothing is committed when an
/// operation fails, so `Internal { retryable: true, .. }` means the whole
/// operation may be replayed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal {
        code: ErrorCode,
        detail: String,
        retryable: bool,
    },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Database unavailable: {detail}")]
    DbUnavailable { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Unauthenticated => ErrorCode::Unauthenticated,
            AppError::Forbidden { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Validation { code, .. }
            | AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::Unauthenticated => "Authentication required".to_string(),
            AppError::Forbidden { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Validation { detail, .. }
            | AppError::Internal { detail, .. }
            | AppError::Config { detail }
            | AppError::DbUnavailable { detail } => detail.clone(),
        }
    }

    /// HTTP-equivalent status, for whatever transport wraps these operations.
    pub fn status(&self) -> u16 {
        match self {
            AppError::Unauthenticated => 401,
            AppError::Forbidden { .. } => 403,
            AppError::NotFound { .. } => 404,
            AppError::Conflict { .. } => 409,
            AppError::Validation { .. } => 422,
            AppError::Internal {
                code: ErrorCode::DbTimeout,
                ..
            } => 504,
            AppError::Internal { retryable: true, .. } | AppError::DbUnavailable { .. } => 503,
            AppError::Internal { .. } | AppError::Config { .. } => 500,
        }
    }

    /// True when no partial mutation was committed and the failure was
    /// transient, so the caller may run the same operation again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Internal {
                retryable: true,
                ..
            } | AppError::DbUnavailable { .. }
        )
    }

    pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Forbidden {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            code: ErrorCode::Internal,
            detail: detail.into(),
            retryable: false,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable(detail: impl Into<String>) -> Self {
        Self::DbUnavailable {
            detail: detail.into(),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InvalidRoomName => ErrorCode::InvalidRoomName,
                    ValidationKind::InvalidTeamName => ErrorCode::InvalidTeamName,
                    ValidationKind::InvalidPoints => ErrorCode::InvalidPoints,
                    ValidationKind::CannotKickSelf => ErrorCode::CannotKickSelf,
                    ValidationKind::Other(ref tag) if tag == "FK_VIOLATION" => {
                        ErrorCode::FkViolation
                    }
                    ValidationKind::Other(ref tag) if tag == "CHECK_VIOLATION" => {
                        ErrorCode::CheckViolation
                    }
                    ValidationKind::Other(_) => ErrorCode::ValidationError,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Forbidden(kind, detail) => {
                let code = match kind {
                    ForbiddenKind::NotAdmin => ErrorCode::NotAdmin,
                    ForbiddenKind::NotMember => ErrorCode::NotAMember,
                    ForbiddenKind::InvalidInvitationCode => ErrorCode::InvalidInvitationCode,
                };
                AppError::forbidden(code, detail)
            }
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::AlreadyInRoom => ErrorCode::AlreadyInRoom,
                    ConflictKind::AlreadyInTeam => ErrorCode::AlreadyInTeam,
                    ConflictKind::RoundExists => ErrorCode::RoundExists,
                    ConflictKind::UniqueEmail => ErrorCode::UniqueEmail,
                    ConflictKind::Other(_) => ErrorCode::Conflict,
                };
                AppError::conflict(code, detail)
            }
            DomainError::NotFound(kind, detail) => {
                let code = match kind {
                    NotFoundKind::User => ErrorCode::UserNotFound,
                    NotFoundKind::Room => ErrorCode::RoomNotFound,
                    NotFoundKind::Team => ErrorCode::TeamNotFound,
                    NotFoundKind::Round => ErrorCode::NoActiveRound,
                    NotFoundKind::TeamMembership => ErrorCode::TeamMembershipNotFound,
                    NotFoundKind::Other(ref tag) if tag == "Record" => ErrorCode::RecordNotFound,
                    NotFoundKind::Other(_) => ErrorCode::NotFound,
                };
                AppError::not_found(code, detail)
            }
            DomainError::Infra(kind, detail) => {
                let (code, retryable) = match kind {
                    InfraErrorKind::Timeout => (ErrorCode::DbTimeout, true),
                    InfraErrorKind::DbUnavailable => (ErrorCode::DbUnavailable, true),
                    InfraErrorKind::SerializationFailure => {
                        (ErrorCode::SerializationFailure, true)
                    }
                    InfraErrorKind::DataCorruption => (ErrorCode::DataCorruption, false),
                    InfraErrorKind::Other(_) => (ErrorCode::DbError, false),
                };
                AppError::Internal {
                    code,
                    detail,
                    retryable,
                }
            }
        }
    }
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        map_db_err(e).into()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
