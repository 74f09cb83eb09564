use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

/// Inserts favorite rows directly, bypassing the duplicate checks of the server.
///
/// The referenced user and target must already exist.
pub struct FavoriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::planets_favorites::Model, TestError> {
        Ok(
            entity::prelude::PlanetFavorite::insert(entity::planets_favorites::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_person_favorite(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<entity::people_favorites::Model, TestError> {
        Ok(
            entity::prelude::PersonFavorite::insert(entity::people_favorites::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                person_id: ActiveValue::Set(person_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
