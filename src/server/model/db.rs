//! Database model type aliases.
//!
//! Shorter names for the SeaORM models generated in the `entity` crate, used across the
//! repositories and services.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `email` - Unique email address
/// - `password` - Stored password, never serialized
/// - `first_name` / `last_name` - Display name
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planets::Model;

/// Type alias for the person database model.
pub type PersonModel = entity::people::Model;

/// Type alias for the planet favorite join model.
///
/// Links a user to a planet they marked as favorite, at most one row per pair.
pub type PlanetFavoriteModel = entity::planets_favorites::Model;

/// Type alias for the person favorite join model.
///
/// Links a user to a person they marked as favorite, at most one row per pair.
pub type PersonFavoriteModel = entity::people_favorites::Model;
