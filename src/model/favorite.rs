use serde::{Deserialize, Serialize};

/// A planet marked as favorite by a user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetFavoriteDto {
    pub id: i32,
    #[serde(rename = "user_ID")]
    pub user_id: i32,
    #[serde(rename = "planets_ID")]
    pub planet_id: i32,
}

/// A person marked as favorite by a user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonFavoriteDto {
    pub id: i32,
    #[serde(rename = "user_ID")]
    pub user_id: i32,
    #[serde(rename = "people_ID")]
    pub person_id: i32,
}

/// Every favorite of a single user, grouped by the kind of entity favorited
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub planets: Vec<PlanetFavoriteDto>,
    pub people: Vec<PersonFavoriteDto>,
}

/// Confirmation returned after a favorite is removed
///
/// Existing clients read the confirmation from the `error` key, so the message keeps
/// being serialized under that name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDeletedDto {
    #[serde(rename = "error")]
    pub message: String,
}

impl From<entity::planets_favorites::Model> for PlanetFavoriteDto {
    fn from(favorite: entity::planets_favorites::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
        }
    }
}

impl From<entity::people_favorites::Model> for PersonFavoriteDto {
    fn from(favorite: entity::people_favorites::Model) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            person_id: favorite.person_id,
        }
    }
}
