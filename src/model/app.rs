use sea_orm::DatabaseConnection;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Config,
}

impl From<(DatabaseConnection, Config)> for AppState {
    fn from((db, config): (DatabaseConnection, Config)) -> Self {
        Self { db, config }
    }
}
