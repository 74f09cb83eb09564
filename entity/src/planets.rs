use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub climate: String,
    pub diameter: String,
    pub gravity: String,
    pub name: String,
    pub terrain: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::planets_favorites::Entity")]
    PlanetsFavorites,
}

impl Related<super::planets_favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanetsFavorites.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
