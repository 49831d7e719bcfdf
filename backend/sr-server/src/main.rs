use sr_server::{AppState, build_router, logger};
use sr_shortcut::ShortcutClient;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = sr_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting sr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .busy_timeout(Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sr_db::migrate(&pool).await?;
    info!("Migrations complete");

    let client = ShortcutClient::new(&config.shortcut);
    info!("Shortcut client targeting {}", client.base_url);

    let state = AppState {
        pool: pool.clone(),
        source: Arc::new(client),
        backlog_state: config.shortcut.backlog_state.clone(),
    };

    let app = build_router(state, &config.server.allowed_origins);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => {
                    error!("Failed to listen for shutdown signal: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    info!("Server stopped");

    Ok(())
}
