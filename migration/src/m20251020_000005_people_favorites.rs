use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_user::User, m20251020_000003_people::People};

static IDX_PEOPLE_FAVORITES_USER_PERSON: &str = "idx-people_favorites-user_id-person_id";
static FK_PEOPLE_FAVORITES_USER_ID: &str = "fk-people_favorites-user_id";
static FK_PEOPLE_FAVORITES_PERSON_ID: &str = "fk-people_favorites-person_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PeopleFavorites::Table)
                    .if_not_exists()
                    .col(pk_auto(PeopleFavorites::Id))
                    .col(integer(PeopleFavorites::UserId))
                    .col(integer(PeopleFavorites::PersonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_FAVORITES_USER_ID)
                            .from(PeopleFavorites::Table, PeopleFavorites::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PEOPLE_FAVORITES_PERSON_ID)
                            .from(PeopleFavorites::Table, PeopleFavorites::PersonId)
                            .to(People::Table, People::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PEOPLE_FAVORITES_USER_PERSON)
                    .table(PeopleFavorites::Table)
                    .col(PeopleFavorites::UserId)
                    .col(PeopleFavorites::PersonId)
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
                    .name(IDX_PEOPLE_FAVORITES_USER_PERSON)
                    .table(PeopleFavorites::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PeopleFavorites::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PeopleFavorites {
    Table,
    Id,
    UserId,
    PersonId,
}
