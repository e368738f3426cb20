//! SQLite pool construction and schema initialization.
//!
//! There is no migration system: the schema is created idempotently at
//! startup with `CREATE TABLE IF NOT EXISTS`, matching the single-file
//! deployment model of the encyclopedia.

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Technique records. The instructional lists are stored as JSON text
/// columns; their element order is the record's order.
const CREATE_TECHNIQUES: &str = r#"
CREATE TABLE IF NOT EXISTS techniques (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    name            TEXT NOT NULL,
    position        TEXT NOT NULL,
    type            TEXT NOT NULL,
    difficulty      TEXT NOT NULL,
    description     TEXT NOT NULL,
    steps           TEXT NOT NULL DEFAULT '[]',
    common_mistakes TEXT NOT NULL DEFAULT '[]',
    counters        TEXT NOT NULL DEFAULT '[]'
)
"#;

/// Directed, typed edges between techniques. Multiple edges between the same
/// pair with different types are allowed; (from, to, type) carries no
/// uniqueness constraint.
const CREATE_RELATIONSHIPS: &str = r#"
CREATE TABLE IF NOT EXISTS technique_relationships (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    from_technique_id INTEGER NOT NULL REFERENCES techniques(id),
    to_technique_id   INTEGER NOT NULL REFERENCES techniques(id),
    relationship_type TEXT NOT NULL
)
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_techniques_name ON techniques(name)",
    "CREATE INDEX IF NOT EXISTS idx_relationships_from ON technique_relationships(from_technique_id)",
    "CREATE INDEX IF NOT EXISTS idx_relationships_to ON technique_relationships(to_technique_id)",
];

/// Opens an SQLite pool for the given database URL.
///
/// The database file is created if missing and foreign key enforcement is
/// enabled on every connection.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Creates the encyclopedia schema if it does not exist yet.
///
/// Safe to call on every startup.
///
/// # Errors
///
/// Returns an error on any failed DDL statement.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TECHNIQUES).execute(pool).await?;
    sqlx::query(CREATE_RELATIONSHIPS).execute(pool).await?;

    for statement in CREATE_INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
