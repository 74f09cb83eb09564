use sea_orm::DatabaseConnection;

use crate::{
    model::planet::PlanetDto,
    server::{
        data::planet::PlanetRepository,
        error::{api::ApiError, Error},
    },
};

/// Read access to the planet catalog.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every planet in storage order
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::ApiError(ApiError::PlanetNotFound))` - No planet with this ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let Some(planet) = PlanetRepository::new(self.db).get_by_id(planet_id).await? else {
            return Err(ApiError::PlanetNotFound(planet_id).into());
        };

        Ok(planet.into())
    }
}
