pub use sea_orm_migration::prelude::*;

mod m20251020_000001_user;
mod m20251020_000002_planets;
mod m20251020_000003_people;
mod m20251020_000004_planets_favorites;
mod m20251020_000005_people_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_user::Migration),
            Box::new(m20251020_000002_planets::Migration),
            Box::new(m20251020_000003_people::Migration),
            Box::new(m20251020_000004_planets_favorites::Migration),
            Box::new(m20251020_000005_people_favorites::Migration),
        ]
    }
}
