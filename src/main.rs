use actix_web::{App, HttpServer};
use anyhow::Context;
use bookshelf::config::{self, AppConfig, Config, LogFormat};
use bookshelf::AppState;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config.app);

    tracing::info!("Starting Bookshelf");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        "Database: {}@{}:{}/{}",
        config.database.user,
        config.database.host,
        config.database.port,
        config.database.name
    );

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    config::run_migrations(&db_pool)
        .await
        .context("Failed to migrate database")?;

    tracing::info!(
        "Database pool initialized ({} connections max), migrations applied",
        config.database.max_connections
    );

    let state = AppState::mysql(db_pool);

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .wrap(TracingLogger::default())
            .configure(move |cfg| state.configure(cfg))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(app: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("bookshelf={},actix_web=info", app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    match app.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
