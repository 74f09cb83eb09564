use sea_orm::DatabaseConnection;

use crate::server::config::DEFAULT_CURRENT_USER_ID;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// User that favorite mutations act on until authentication exists
    pub current_user_id: i32,
}

impl AppState {
    pub fn new(db: DatabaseConnection, current_user_id: i32) -> Self {
        Self {
            db,
            current_user_id,
        }
    }
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self::new(db, DEFAULT_CURRENT_USER_ID)
    }
}
