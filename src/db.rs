//! Database pool setup

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Connect to the PMS database.
///
/// The engine only reads from the schema, so a small pool is enough.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}
