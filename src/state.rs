use crate::config::AppConfig;
use crate::database::DatabaseService;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub database: Arc<DatabaseService>,
}
