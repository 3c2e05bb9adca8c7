pub mod config;
pub mod database;
pub mod error;
pub mod fairings;
pub mod models;
pub mod routes;
pub mod schema;
pub mod state;

use rocket::Config;
use rocket_cors::{AllowedOrigins, CorsOptions};
use std::sync::Arc;

pub use config::AppConfig;
pub use database::DatabaseService;
pub use error::ApiError;
pub use fairings::RequestLogger;
pub use state::AppState;

pub fn create_rocket() -> rocket::Rocket<rocket::Build> {
    // Load configuration from environment
    let config = AppConfig::from_env();

    let database = Arc::new(
        DatabaseService::with_pool_size(&config.database_url, config.pool_size)
            .expect("Failed to initialize database"),
    );

    build_rocket(AppState { config, database })
}

/// Mounts routes and fairings around prepared state
pub fn build_rocket(state: AppState) -> rocket::Rocket<rocket::Build> {
    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .to_cors()
        .expect("Failed to create CORS configuration");

    let rocket_config = Config {
        port: state.config.port,
        address: state.config.host.parse().expect("Invalid host address"),
        ..Config::default()
    };

    rocket::custom(&rocket_config)
        .manage(state)
        .attach(cors)
        .attach(RequestLogger)
        .mount("/", routes::get_routes())
}
