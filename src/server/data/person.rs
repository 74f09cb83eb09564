use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::PersonModel;

pub struct PersonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PersonRepository<'a, C> {
    /// Creates a new instance of [`PersonRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every person in storage order
    pub async fn get_all(&self) -> Result<Vec<PersonModel>, DbErr> {
        entity::prelude::Person::find().all(self.db).await
    }

    pub async fn get_by_id(&self, person_id: i32) -> Result<Option<PersonModel>, DbErr> {
        entity::prelude::Person::find_by_id(person_id)
            .one(self.db)
            .await
    }
}
