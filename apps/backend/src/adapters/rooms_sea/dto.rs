//! DTOs for rooms_sea adapter.

/// DTO for creating a new room. The creator starts out as admin.
#[derive(Debug, Clone)]
pub struct RoomCreate {
    pub name: String,
    pub creator_id: i64,
    pub invitation_code: String,
    pub is_private: bool,
    pub points_per_word: i32,
}

impl RoomCreate {
    pub fn new(
        name: impl Into<String>,
        creator_id: i64,
        invitation_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            creator_id,
            invitation_code: invitation_code.into(),
            is_private: false,
            points_per_word: 10,
        }
    }

    pub fn private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn with_points(mut self, points_per_word: i32) -> Self {
        self.points_per_word = points_per_word;
        self
    }
}

/// Settings overwritten by an admin update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSettings {
    pub name: String,
    pub is_private: bool,
    pub points_per_word: i32,
}
