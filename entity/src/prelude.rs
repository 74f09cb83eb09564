pub use super::people::Entity as Person;
pub use super::people_favorites::Entity as PersonFavorite;
pub use super::planets::Entity as Planet;
pub use super::planets_favorites::Entity as PlanetFavorite;
pub use super::user::Entity as User;
