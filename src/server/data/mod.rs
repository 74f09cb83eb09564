//! Data access layer repositories.
//!
//! Repositories wrap the SeaORM queries for a single table. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same repository can run on the pooled connection or
//! inside a transaction.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod user;
