pub mod room_memberships;
pub mod rooms;
pub mod rounds;
pub mod team_memberships;
pub mod teams;
pub mod user_tokens;
pub mod users;

pub use room_memberships::Entity as RoomMemberships;
pub use room_memberships::Model as RoomMembership;
pub use rooms::Entity as Rooms;
pub use rooms::Model as Room;
pub use rounds::Entity as Rounds;
pub use rounds::Model as Round;
pub use rounds::RoundState;
pub use team_memberships::Entity as TeamMemberships;
pub use team_memberships::Model as TeamMembership;
pub use teams::Entity as Teams;
pub use teams::Model as Team;
pub use user_tokens::Entity as UserTokens;
pub use user_tokens::Model as UserToken;
pub use users::Entity as Users;
pub use users::Model as User;
