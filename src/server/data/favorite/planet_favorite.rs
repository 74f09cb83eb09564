use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::server::model::db::PlanetFavoriteModel;

pub struct PlanetFavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetFavoriteRepository<'a, C> {
    /// Creates a new instance of [`PlanetFavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new favorite linking a user to a planet
    ///
    /// # Arguments
    /// - `user_id` (`i32`): ID of the user entry in the database
    /// - `planet_id` (`i32`): ID of the planet entry in the database
    pub async fn create(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<PlanetFavoriteModel, DbErr> {
        let favorite = entity::planets_favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Find the favorite entry for a user & planet pair
    pub async fn find(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<Option<PlanetFavoriteModel>, DbErr> {
        entity::prelude::PlanetFavorite::find()
            .filter(entity::planets_favorites::Column::UserId.eq(user_id))
            .filter(entity::planets_favorites::Column::PlanetId.eq(planet_id))
            .one(self.db)
            .await
    }

    /// Gets all planet favorite entries for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<PlanetFavoriteModel>, DbErr> {
        entity::prelude::PlanetFavorite::find()
            .filter(entity::planets_favorites::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes a favorite entry
    ///
    /// Returns OK regardless of the entry existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PlanetFavorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
