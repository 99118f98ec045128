//! Coordinators: one per aggregate, each method runs inside the caller's
//! transaction and returns `AppError`.

pub mod authz;
pub mod cascade;
pub mod memberships;
pub mod rooms;
pub mod rounds;
pub mod teams;
pub mod validation;
pub mod views;

pub use cascade::{CascadeDeletionOrchestrator, TeardownReport};
pub use memberships::MembershipCoordinator;
pub use rooms::RoomRegistry;
pub use rounds::RoundStateMachine;
pub use teams::TeamCoordinator;
