//! Repositories for the user favorite join tables.

pub mod person_favorite;
pub mod planet_favorite;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` was raised by the unique index on a (user, target) favorite pair
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
