pub mod prelude;

pub mod people;
pub mod people_favorites;
pub mod planets;
pub mod planets_favorites;
pub mod user;
