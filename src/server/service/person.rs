use sea_orm::DatabaseConnection;

use crate::{
    model::person::PersonDto,
    server::{
        data::person::PersonRepository,
        error::{api::ApiError, Error},
    },
};

/// Read access to the people catalog.
pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    /// Creates a new instance of [`PersonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every person in storage order
    pub async fn get_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PersonRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    /// Retrieves a single person, [`ApiError::PersonNotFound`] if absent
    pub async fn get_person(&self, person_id: i32) -> Result<PersonDto, Error> {
        let Some(person) = PersonRepository::new(self.db).get_by_id(person_id).await? else {
            return Err(ApiError::PersonNotFound(person_id).into());
        };

        Ok(person.into())
    }
}
