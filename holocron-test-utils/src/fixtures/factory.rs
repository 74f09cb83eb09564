/// Create a user model with default test values.
///
/// Matches the row inserted by `CatalogFixtures::insert_mock_user`.
pub fn mock_user_model(user_id: i32) -> entity::user::Model {
    entity::user::Model {
        id: user_id,
        email: format!("user{}@holocron.test", user_id),
        password: "hunter2".to_string(),
        first_name: "Test".to_string(),
        last_name: format!("User {}", user_id),
        is_active: true,
    }
}

/// Create a planet model with default test values.
pub fn mock_planet_model(planet_id: i32) -> entity::planets::Model {
    entity::planets::Model {
        id: planet_id,
        climate: "arid".to_string(),
        diameter: "10465".to_string(),
        gravity: "1 standard".to_string(),
        name: format!("Planet {}", planet_id),
        terrain: "desert".to_string(),
        is_active: true,
    }
}

/// Create a person model with default test values.
pub fn mock_person_model(person_id: i32) -> entity::people::Model {
    entity::people::Model {
        id: person_id,
        birth_year: "19BBY".to_string(),
        eye_color: "blue".to_string(),
        gender: "male".to_string(),
        name: format!("Person {}", person_id),
        mass: "77".to_string(),
        is_active: true,
    }
}
