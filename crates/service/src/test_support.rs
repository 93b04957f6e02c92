#![cfg(test)]
use std::path::PathBuf;

use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, in_memory_config, DatabaseConfig};

/// Fresh in-memory database with the schema applied; tests never share state.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&in_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// File-backed database using the default pool size, so several connections
/// contend for the SQLite write lock. Returns the directory to remove afterwards.
pub async fn get_file_db(tag: &str) -> Result<(DatabaseConnection, PathBuf), anyhow::Error> {
    let dir = std::env::temp_dir().join(format!("items-{tag}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir)?;
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}/items.db?mode=rwc", dir.display()),
        ..DatabaseConfig::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((db, dir))
}
