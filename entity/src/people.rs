use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub birth_year: String,
    pub eye_color: String,
    pub gender: String,
    pub name: String,
    pub mass: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people_favorites::Entity")]
    PeopleFavorites,
}

impl Related<super::people_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFavorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
