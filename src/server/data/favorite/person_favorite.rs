use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter,
};

use crate::server::model::db::PersonFavoriteModel;

pub struct PersonFavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonFavoriteRepository<'a, C> {
    /// Creates a new instance of [`PersonFavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a new favorite linking a user to a person
    pub async fn create(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<PersonFavoriteModel, DbErr> {
        let favorite = entity::people_favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            person_id: ActiveValue::Set(person_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Find the favorite entry for a user & person pair
    pub async fn find(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<Option<PersonFavoriteModel>, DbErr> {
        entity::prelude::PersonFavorite::find()
            .filter(entity::people_favorites::Column::UserId.eq(user_id))
            .filter(entity::people_favorites::Column::PersonId.eq(person_id))
            .one(self.db)
            .await
    }

    /// Gets all person favorite entries for the provided user ID
    pub async fn get_many_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<PersonFavoriteModel>, DbErr> {
        entity::prelude::PersonFavorite::find()
            .filter(entity::people_favorites::Column::UserId.eq(user_id))
            .all(self.db)
            .await
    }

    /// Deletes a favorite entry, check [`DeleteResult::rows_affected`] to confirm it existed
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::PersonFavorite::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}
