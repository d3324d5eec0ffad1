pub mod account_queries;

use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

/// Opens the connection pool for the configured backend (SQLite locally and
/// under test, PostgreSQL when deployed).
pub async fn connect(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    install_default_drivers();

    // An in-memory SQLite database is private to the connection that opened
    // it, so the pool must never hold more than one.
    let max_connections = if database_url.contains(":memory:") { 1 } else { 10 };

    AnyPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Creates the accounts table if it does not exist yet. Runs once at process
/// start; the DDL differs per backend only in how the key auto-increments.
pub async fn init_schema(pool: &AnyPool, database_url: &str) -> Result<(), sqlx::Error> {
    let id_column = if database_url.starts_with("sqlite") {
        "INTEGER PRIMARY KEY AUTOINCREMENT"
    } else {
        "BIGSERIAL PRIMARY KEY"
    };

    let ddl = format!(
        "CREATE TABLE IF NOT EXISTS accounts (
             id {id_column},
             account_number TEXT NOT NULL UNIQUE,
             name TEXT NOT NULL,
             currency TEXT NOT NULL,
             country TEXT NOT NULL,
             balance DOUBLE PRECISION NOT NULL DEFAULT 0,
             status TEXT NOT NULL DEFAULT 'active',
             created_at TEXT NOT NULL
         )"
    );

    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
