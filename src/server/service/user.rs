//! User listing and the per-user favorites aggregate.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        favorite::{PersonFavoriteDto, PlanetFavoriteDto, UserFavoritesDto},
        user::UserDto,
    },
    server::{
        data::{
            favorite::{
                person_favorite::PersonFavoriteRepository,
                planet_favorite::PlanetFavoriteRepository,
            },
            user::UserRepository,
        },
        error::{api::ApiError, Error},
    },
};

/// Service for user operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user, without their passwords
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Gathers every planet & person favorite of a user.
    ///
    /// The user must exist, an existing user without favorites yields two empty lists.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user whose favorites are retrieved
    ///
    /// # Returns
    /// - `Ok(UserFavoritesDto)` - Favorites grouped under `planets` & `people`
    /// - `Err(Error::ApiError(ApiError::UserNotFound))` - No user with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(ApiError::UserNotFound(user_id).into());
        }

        let planets = PlanetFavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;
        let people = PersonFavoriteRepository::new(self.db)
            .get_many_by_user_id(user_id)
            .await?;

        Ok(UserFavoritesDto {
            planets: planets.into_iter().map(PlanetFavoriteDto::from).collect(),
            people: people.into_iter().map(PersonFavoriteDto::from).collect(),
        })
    }
}
