use log::info;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub host: String,
    pub data_dir: String,
    pub database_url: String,
    pub pool_size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "127.0.0.1".to_string(),
            data_dir: "./data".to_string(),
            database_url: "./data/archweb.db".to_string(),
            pool_size: 8,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("ARCHWEB_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        let host = env::var("ARCHWEB_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let data_dir = env::var("ARCHWEB_DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let database_url =
            env::var("ARCHWEB_DATABASE_URL").unwrap_or_else(|_| format!("{data_dir}/archweb.db"));

        let pool_size = env::var("ARCHWEB_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(8);

        info!("Configuration loaded:");
        info!("  Host: {host}");
        info!("  Port: {port}");
        info!("  Data Directory: {data_dir}");
        info!("  Database URL: {database_url}");
        info!("  Pool Size: {pool_size}");

        Self {
            port,
            host,
            data_dir,
            database_url,
            pool_size,
        }
    }
}
