use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub name: String,
    pub mass: String,
    pub is_active: bool,
}

impl From<entity::people::Model> for PersonDto {
    fn from(person: entity::people::Model) -> Self {
        Self {
            id: person.id,
            birth_year: person.birth_year,
            eye_color: person.eye_color,
            gender: person.gender,
            name: person.name,
            mass: person.mass,
            is_active: person.is_active,
        }
    }
}
