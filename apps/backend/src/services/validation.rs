//! Input checks shared by the coordinators.

use crate::errors::domain::{DomainError, ValidationKind};

pub const MAX_NAME_LEN: usize = 64;
pub const POINTS_RANGE: std::ops::RangeInclusive<i32> = 1..=1000;

fn name(raw: &str, kind: ValidationKind, label: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            kind,
            format!("{label} name must not be empty"),
        ));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(
            kind,
            format!("{label} name must be at most {MAX_NAME_LEN} characters"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Trimmed room name.
pub fn room_name(raw: &str) -> Result<String, DomainError> {
    name(raw, ValidationKind::InvalidRoomName, "Room")
}

/// Trimmed team name.
pub fn team_name(raw: &str) -> Result<String, DomainError> {
    name(raw, ValidationKind::InvalidTeamName, "Team")
}

pub fn points_per_word(points: i32) -> Result<i32, DomainError> {
    if POINTS_RANGE.contains(&points) {
        Ok(points)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPoints,
            format!(
                "Points per word must be between {} and {}",
                POINTS_RANGE.start(),
                POINTS_RANGE.end()
            ),
        ))
    }
}
