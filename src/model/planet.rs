use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub climate: String,
    pub diameter: String,
    pub gravity: String,
    pub name: String,
    pub terrain: String,
    pub is_active: bool,
}

impl From<entity::planets::Model> for PlanetDto {
    fn from(planet: entity::planets::Model) -> Self {
        Self {
            id: planet.id,
            climate: planet.climate,
            diameter: planet.diameter,
            gravity: planet.gravity,
            name: planet.name,
            terrain: planet.terrain,
            is_active: planet.is_active,
        }
    }
}
