use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and brings the schema up to date.
///
/// Runs all pending SeaORM migrations. When `reset_database` is set, every table is
/// dropped first and the schema is rebuilt from scratch, discarding all data.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    if config.reset_database {
        tracing::warn!("RESET_DATABASE is set, dropping all tables");
        Migrator::fresh(&db).await?;
    } else {
        Migrator::up(&db, None).await?;
    }

    Ok(db)
}

/// Resolves once the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
