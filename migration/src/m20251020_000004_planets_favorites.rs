use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_user::User, m20251020_000002_planets::Planets};

static IDX_PLANETS_FAVORITES_USER_PLANET: &str = "idx-planets_favorites-user_id-planet_id";
static FK_PLANETS_FAVORITES_USER_ID: &str = "fk-planets_favorites-user_id";
static FK_PLANETS_FAVORITES_PLANET_ID: &str = "fk-planets_favorites-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(PlanetsFavorites::Table)
                    .if_not_exists()
                    .col(pk_auto(PlanetsFavorites::Id))
                    .col(integer(PlanetsFavorites::UserId))
                    .col(integer(PlanetsFavorites::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANETS_FAVORITES_USER_ID)
                            .from(PlanetsFavorites::Table, PlanetsFavorites::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PLANETS_FAVORITES_PLANET_ID)
                            .from(PlanetsFavorites::Table, PlanetsFavorites::PlanetId)
                            .to(Planets::Table, Planets::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLANETS_FAVORITES_USER_PLANET)
                    .table(PlanetsFavorites::Table)
                    .col(PlanetsFavorites::UserId)
                    .col(PlanetsFavorites::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PLANETS_FAVORITES_USER_PLANET)
                    .table(PlanetsFavorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PlanetsFavorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PlanetsFavorites {
    Table,
    Id,
    UserId,
    PlanetId,
}
