//! Process-local adapters backed by in-memory collections.
//!
//! Nothing here survives a restart; state lives as long as the server that
//! created it.

mod in_memory_user_repository;

pub use in_memory_user_repository::InMemoryUserRepository;
