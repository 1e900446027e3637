use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use transit_access_data::DataError;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Brings the schema up to date and leaves the database ready for the
/// transport layer. No requests are served here.
#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    _ = dotenv();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let appender = tracing_appender::rolling::daily("./logs", "transit_access_data.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);

    // A layer that logs events to rolling files.
    let file_log = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_appender)
        .with_ansi(false)
        .pretty();

    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(file_log)
        .with(env_filter)
        .init();

    let db_url = env::var("DATABASE_URL").map_err(|_| DataError::Configuration {
        message: "DATABASE_URL must be set".to_string(),
    })?;

    let pool = sqlx::PgPool::connect(&db_url)
        .await
        .context("connecting to the database")?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("running migrations")?;

    info!("schema is in place, data layer ready");

    Ok(())
}
