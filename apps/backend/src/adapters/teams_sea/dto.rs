//! DTOs for teams_sea adapter.

#[derive(Debug, Clone)]
pub struct TeamCreate {
    pub room_id: i64,
    pub name: String,
}

impl TeamCreate {
    pub fn new(room_id: i64, name: impl Into<String>) -> Self {
        Self {
            room_id,
            name: name.into(),
        }
    }
}
