use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::debug;

/// Run all pending migrations.
pub async fn run(pool: &SqlitePool) -> Result<()> {
    create_migration_table(pool).await?;
    let current_version = get_schema_version(pool).await?;

    if current_version < 1 {
        debug!("Running migration v1");
        run_migration_v1(pool).await?;
        set_schema_version(pool, 1).await?;
    }

    Ok(())
}

async fn create_migration_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY
        )
        ",
    )
    .execute(pool)
    .await
    .context("Failed to create schema_migrations table")?;

    Ok(())
}

async fn get_schema_version(pool: &SqlitePool) -> Result<i64> {
    let row: (Option<i64>,) =
        sqlx::query_as("SELECT MAX(version) FROM schema_migrations")
            .fetch_one(pool)
            .await
            .context("Failed to read schema version")?;

    Ok(row.0.unwrap_or(0))
}

async fn set_schema_version(pool: &SqlitePool, version: i64) -> Result<()> {
    sqlx::query("INSERT INTO schema_migrations (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await
        .context("Failed to record schema version")?;

    Ok(())
}

/// v1: content tables. Ids are append-only ascending; the feed cursor
/// depends on that.
async fn run_migration_v1(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r"
        CREATE TABLE categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            image TEXT,
            color TEXT,
            isdeleted INTEGER NOT NULL DEFAULT 0
        )
        ",
    )
    .execute(pool)
    .await
    .context("Failed to create categories table")?;

    sqlx::query(
        r"
        CREATE TABLE posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            slug TEXT UNIQUE,
            title TEXT NOT NULL,
            description TEXT,
            content TEXT,
            image TEXT,
            author TEXT,
            published_at TEXT,
            category INTEGER REFERENCES categories(id),
            seo_title TEXT,
            seo_description TEXT,
            seo_keywords TEXT,
            externallink TEXT,
            is_deep_research INTEGER NOT NULL DEFAULT 0,
            isdeleted INTEGER NOT NULL DEFAULT 0
        )
        ",
    )
    .execute(pool)
    .await
    .context("Failed to create posts table")?;

    // Feed reads are (isdeleted, category, id DESC) range scans.
    sqlx::query("CREATE INDEX idx_posts_feed ON posts (isdeleted, category, id DESC)")
        .execute(pool)
        .await
        .context("Failed to create feed index")?;

    Ok(())
}
