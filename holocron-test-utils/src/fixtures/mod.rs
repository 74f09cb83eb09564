//! Test fixture modules for database row creation.
//!
//! - `catalog` - Users, planets and people
//! - `favorite` - Planet & person favorites of a user
//! - `factory` - In-memory models matching what the fixtures insert

pub mod catalog;
pub mod factory;
pub mod favorite;
