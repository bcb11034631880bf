//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod user_repository;
mod user_roster_command;
mod user_roster_query;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
pub use user_roster_command::{CreateUserRequest, DeleteOutcome, UserRosterCommand};
pub use user_roster_query::UserRosterQuery;
