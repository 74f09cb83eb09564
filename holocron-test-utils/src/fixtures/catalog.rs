use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_user(&self, user_id: i32) -> Result<entity::user::Model, TestError> {
        let user = factory::mock_user_model(user_id);

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(user.id),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            is_active: ActiveValue::Set(user.is_active),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_planet(
        &self,
        planet_id: i32,
    ) -> Result<entity::planets::Model, TestError> {
        let planet = factory::mock_planet_model(planet_id);

        Ok(entity::prelude::Planet::insert(entity::planets::ActiveModel {
            id: ActiveValue::Set(planet.id),
            climate: ActiveValue::Set(planet.climate),
            diameter: ActiveValue::Set(planet.diameter),
            gravity: ActiveValue::Set(planet.gravity),
            name: ActiveValue::Set(planet.name),
            terrain: ActiveValue::Set(planet.terrain),
            is_active: ActiveValue::Set(planet.is_active),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_person(
        &self,
        person_id: i32,
    ) -> Result<entity::people::Model, TestError> {
        let person = factory::mock_person_model(person_id);

        Ok(entity::prelude::Person::insert(entity::people::ActiveModel {
            id: ActiveValue::Set(person.id),
            birth_year: ActiveValue::Set(person.birth_year),
            eye_color: ActiveValue::Set(person.eye_color),
            gender: ActiveValue::Set(person.gender),
            name: ActiveValue::Set(person.name),
            mass: ActiveValue::Set(person.mass),
            is_active: ActiveValue::Set(person.is_active),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
