// Unit tests for error mapping - pure domain logic without database dependencies
use sea_orm::{DbErr, RuntimeErr};

use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_422() {
    let de = DomainError::validation(ValidationKind::InvalidPoints, "points out of range");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidPoints);
    assert_eq!(app.status(), 422);

    let other = DomainError::validation_other("bad field");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
}

#[test]
fn maps_forbidden() {
    let app: AppError = DomainError::not_admin().into();
    assert_eq!(app.code(), ErrorCode::NotAdmin);
    assert_eq!(app.status(), 403);

    let app: AppError =
        DomainError::forbidden(ForbiddenKind::InvalidInvitationCode, "wrong code").into();
    assert_eq!(app.code().as_str(), "INVALID_INVITATION_CODE");
    assert!(matches!(app, AppError::Forbidden { .. }));
}

#[test]
fn maps_conflicts() {
    let room = DomainError::conflict(ConflictKind::AlreadyInRoom, "already in a room");
    let app: AppError = room.into();
    assert_eq!(app.code().as_str(), "ALREADY_IN_ROOM");
    assert_eq!(app.status(), 409);

    let other = DomainError::conflict(ConflictKind::Other("Unique".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert!(!app.is_retryable());
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Room, "no room");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "ROOM_NOT_FOUND");
    assert_eq!(app.status(), 404);

    let round = DomainError::not_found(NotFoundKind::Round, "No active round");
    let app: AppError = round.into();
    assert_eq!(app.code(), ErrorCode::NoActiveRound);
}

#[test]
fn maps_infra_to_internal() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status(), 504);
    assert!(app.is_retryable());

    let ser = DomainError::infra(InfraErrorKind::SerializationFailure, "aborted");
    let app: AppError = ser.into();
    assert!(matches!(
        app,
        AppError::Internal {
            code: ErrorCode::SerializationFailure,
            retryable: true,
            ..
        }
    ));

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status(), 500);
    assert!(!app.is_retryable());
}

#[test]
fn unique_violation_on_room_membership_is_already_in_room() {
    let err = DbErr::Exec(RuntimeErr::Internal(
        "error returned from database: (code: 2067) UNIQUE constraint failed: room_memberships.user_id"
            .into(),
    ));
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::AlreadyInRoom);
}

#[test]
fn postgres_constraint_names_are_recognised() {
    let err = DbErr::Exec(RuntimeErr::Internal(
        "duplicate key value violates unique constraint \"ux_rounds_room_id\"".into(),
    ));
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::RoundExists);

    let err = DbErr::Exec(RuntimeErr::Internal(
        "duplicate key value violates unique constraint \"ux_team_memberships_user_id\"".into(),
    ));
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::AlreadyInTeam);
}

#[test]
fn serialization_failures_are_retryable() {
    let err = DbErr::Exec(RuntimeErr::Internal(
        "could not serialize access due to concurrent update (SQLSTATE 40001)".into(),
    ));
    let app: AppError = err.into();
    assert!(app.is_retryable());
    assert_eq!(app.code(), ErrorCode::SerializationFailure);

    let locked = DbErr::Exec(RuntimeErr::Internal("database is locked".into()));
    let app: AppError = locked.into();
    assert!(app.is_retryable());
}

#[test]
fn record_not_found_is_generic() {
    let app: AppError = DbErr::RecordNotFound("rooms".into()).into();
    assert_eq!(app.code(), ErrorCode::RecordNotFound);
}
