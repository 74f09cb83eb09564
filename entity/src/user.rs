use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(120))", unique)]
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::people_favorites::Entity")]
    PeopleFavorites,
    #[sea_orm(has_many = "super::planets_favorites::Entity")]
    PlanetsFavorites,
}

impl Related<super::people_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PeopleFavorites.def()
    }
}

impl Related<super::planets_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetsFavorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
