//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// mock fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    users: Vec<i32>,
    planets: Vec<i32>,
    people: Vec<i32>,
    planet_favorites: Vec<(i32, i32)>, // (user_id, planet_id)
    person_favorites: Vec<(i32, i32)>, // (user_id, person_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            users: Vec::new(),
            planets: Vec::new(),
            people: Vec::new(),
            planet_favorites: Vec::new(),
            person_favorites: Vec::new(),
        }
    }

    /// Add every Holocron table to the test database.
    ///
    /// Tables are created by running the migrations, so the test schema carries the same
    /// foreign keys and unique favorite indexes as a deployed database.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user into the database during `build()`.
    pub fn with_mock_user(mut self, user_id: i32) -> Self {
        self.users.push(user_id);
        self
    }

    /// Insert a mock planet into the database during `build()`.
    pub fn with_mock_planet(mut self, planet_id: i32) -> Self {
        self.planets.push(planet_id);
        self
    }

    /// Insert a mock person into the database during `build()`.
    pub fn with_mock_person(mut self, person_id: i32) -> Self {
        self.people.push(person_id);
        self
    }

    /// Mark a planet as favorite of a user during `build()`.
    ///
    /// Both the user and the planet must be queued with `with_mock_user` and
    /// `with_mock_planet`.
    pub fn with_planet_favorite(mut self, user_id: i32, planet_id: i32) -> Self {
        self.planet_favorites.push((user_id, planet_id));
        self
    }

    /// Mark a person as favorite of a user during `build()`.
    ///
    /// Both the user and the person must be queued with `with_mock_user` and
    /// `with_mock_person`.
    pub fn with_person_favorite(mut self, user_id: i32, person_id: i32) -> Self {
        self.person_favorites.push((user_id, person_id));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Runs the migrations if catalog tables were requested, then creates custom tables
    /// 2. Inserts users, planets, people and finally favorites
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        if self.include_catalog_tables {
            Migrator::up(&setup.db, None).await?;
        }

        setup.with_tables(self.tables).await?;

        // 2. Insert database fixtures
        for user_id in self.users {
            setup.catalog().insert_mock_user(user_id).await?;
        }

        for planet_id in self.planets {
            setup.catalog().insert_mock_planet(planet_id).await?;
        }

        for person_id in self.people {
            setup.catalog().insert_mock_person(person_id).await?;
        }

        for (user_id, planet_id) in self.planet_favorites {
            setup
                .favorite()
                .insert_planet_favorite(user_id, planet_id)
                .await?;
        }

        for (user_id, person_id) in self.person_favorites {
            setup
                .favorite()
                .insert_person_favorite(user_id, person_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
