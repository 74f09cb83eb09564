//! Creation & removal of user favorites.
//!
//! Every mutation runs its existence checks and its write inside a single transaction.
//! A concurrent request inserting the same pair between the check and the insert trips the
//! unique index on the favorite table, which is reported the same way as the checked
//! duplicate.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::favorite::{PersonFavoriteDto, PlanetFavoriteDto},
    server::{
        data::{
            favorite::{
                is_unique_violation, person_favorite::PersonFavoriteRepository,
                planet_favorite::PlanetFavoriteRepository,
            },
            person::PersonRepository,
            planet::PlanetRepository,
            user::UserRepository,
        },
        error::{api::ApiError, Error},
    },
};

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Marks a planet as favorite for a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user the favorite is created for
    /// - `planet_id` - ID of the planet to favorite
    ///
    /// # Returns
    /// - `Ok(PlanetFavoriteDto)` - The newly created favorite
    /// - `Err(Error::ApiError(ApiError::PlanetFavoriteExists))` - Planet already favorited
    /// - `Err(Error::ApiError(ApiError::UserNotFound))` - No user with this ID
    /// - `Err(Error::ApiError(ApiError::PlanetNotFound))` - No planet with this ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<PlanetFavoriteDto, Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = PlanetFavoriteRepository::new(&txn);

        if favorite_repo.find(user_id, planet_id).await?.is_some() {
            return Err(ApiError::PlanetFavoriteExists { user_id, planet_id }.into());
        }

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound(user_id).into());
        }

        if PlanetRepository::new(&txn)
            .get_by_id(planet_id)
            .await?
            .is_none()
        {
            return Err(ApiError::PlanetNotFound(planet_id).into());
        }

        let favorite = favorite_repo
            .create(user_id, planet_id)
            .await
            .map_err(|err| {
                duplicate_or_db_err(err, ApiError::PlanetFavoriteExists { user_id, planet_id })
            })?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            planet_id = %planet_id,
            "Added planet favorite"
        );

        Ok(favorite.into())
    }

    /// Removes a planet from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite existed and was removed
    /// - `Err(Error::ApiError(ApiError::PlanetFavoriteNotFound))` - Planet never favorited
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_planet_favorite(&self, user_id: i32, planet_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = PlanetFavoriteRepository::new(&txn);

        let Some(favorite) = favorite_repo.find(user_id, planet_id).await? else {
            return Err(ApiError::PlanetFavoriteNotFound { user_id, planet_id }.into());
        };

        favorite_repo.delete(favorite.id).await?;
        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            planet_id = %planet_id,
            "Removed planet favorite"
        );

        Ok(())
    }

    /// Marks a person as favorite for a user.
    ///
    /// Same checks as [`Self::add_planet_favorite`], reported with the person variants of
    /// [`ApiError`].
    pub async fn add_person_favorite(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<PersonFavoriteDto, Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = PersonFavoriteRepository::new(&txn);

        if favorite_repo.find(user_id, person_id).await?.is_some() {
            return Err(ApiError::PersonFavoriteExists { user_id, person_id }.into());
        }

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(ApiError::UserNotFound(user_id).into());
        }

        if PersonRepository::new(&txn)
            .get_by_id(person_id)
            .await?
            .is_none()
        {
            return Err(ApiError::PersonNotFound(person_id).into());
        }

        let favorite = favorite_repo
            .create(user_id, person_id)
            .await
            .map_err(|err| {
                duplicate_or_db_err(err, ApiError::PersonFavoriteExists { user_id, person_id })
            })?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            person_id = %person_id,
            "Added person favorite"
        );

        Ok(favorite.into())
    }

    /// Removes a person from a user's favorites, [`ApiError::PersonFavoriteNotFound`] if absent
    pub async fn remove_person_favorite(&self, user_id: i32, person_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = PersonFavoriteRepository::new(&txn);

        let Some(favorite) = favorite_repo.find(user_id, person_id).await? else {
            return Err(ApiError::PersonFavoriteNotFound { user_id, person_id }.into());
        };

        favorite_repo.delete(favorite.id).await?;
        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            person_id = %person_id,
            "Removed person favorite"
        );

        Ok(())
    }
}

/// Reports an insert that tripped the unique favorite index as `duplicate`
///
/// Reached when another request inserted the same pair after the duplicate check.
fn duplicate_or_db_err(err: DbErr, duplicate: ApiError) -> Error {
    if is_unique_violation(&err) {
        duplicate.into()
    } else {
        err.into()
    }
}
