//! Business logic services.
//!
//! Services sit between the controllers and the repositories: they turn database models
//! into DTOs, signal missing entities with [`crate::server::error::api::ApiError`] and own
//! the transactions of the favorite mutations.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
