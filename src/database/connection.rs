use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use log::{debug, info, warn};
use std::path::Path;
use std::time::Duration;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Applies per-connection pragmas. Foreign keys must be on for the
/// cascade and referential-integrity rules of the schema to hold.
#[derive(Debug)]
pub struct SqliteConnectionCustomizer;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqliteConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        use diesel::sql_query;

        sql_query("PRAGMA busy_timeout = 30000")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;

        let mut wal_attempts = 0;
        let max_wal_attempts = 3;
        loop {
            match sql_query("PRAGMA journal_mode = WAL").execute(conn) {
                Ok(_) => break,
                Err(e) => {
                    wal_attempts += 1;
                    if wal_attempts >= max_wal_attempts {
                        warn!("Failed to enable WAL mode after {max_wal_attempts} attempts: {e}");
                        break;
                    }
                    std::thread::sleep(Duration::from_millis(10));
                }
            }
        }

        if let Err(e) = sql_query("PRAGMA synchronous = NORMAL").execute(conn) {
            warn!("Failed to set synchronous mode: {e}");
        }

        Ok(())
    }
}

/// Creates the connection pool and brings the schema up to date
pub fn create_pool(database_url: &str, max_size: u32) -> Result<DbPool, Box<dyn std::error::Error>> {
    if let Some(parent) = Path::new(database_url).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_timeout(Duration::from_secs(30))
        .idle_timeout(Some(Duration::from_secs(300)))
        .connection_customizer(Box::new(SqliteConnectionCustomizer))
        .build(manager)?;

    let mut conn = pool.get()?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| format!("Failed to run migrations: {e}"))?;
    for version in &applied {
        debug!("Applied migration {version}");
    }

    info!("Database ready at {database_url} ({} new migrations)", applied.len());

    Ok(pool)
}

/// Gets a connection from the pool with retry logic and exponential backoff
pub fn get_connection_with_retry(pool: &DbPool) -> Result<DbConnection, diesel::r2d2::Error> {
    let mut attempts = 0;
    let max_attempts = 5;

    loop {
        match pool.get() {
            Ok(conn) => return Ok(conn),
            Err(e) => {
                attempts += 1;
                if attempts >= max_attempts {
                    return Err(diesel::r2d2::Error::ConnectionError(
                        diesel::ConnectionError::BadConnection(format!(
                            "Failed to get connection after {max_attempts} attempts: {e}"
                        )),
                    ));
                }

                // 10ms, 20ms, 40ms, 80ms
                let delay = Duration::from_millis(10 * (1 << (attempts - 1)));
                std::thread::sleep(delay);
            }
        }
    }
}

/// Pool checkout for the operation structs, folded into diesel's error type
pub fn checkout(pool: &DbPool) -> Result<DbConnection, DieselError> {
    get_connection_with_retry(pool).map_err(|e| {
        DieselError::DatabaseError(DatabaseErrorKind::UnableToSendCommand, Box::new(e.to_string()))
    })
}
