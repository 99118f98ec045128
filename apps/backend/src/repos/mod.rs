//! Repository functions: domain models over the sea adapters, `DbErr`
//! translated to `DomainError`.

pub mod memberships;
pub mod rooms;
pub mod rounds;
pub mod teams;
pub mod users;
