use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use uuid::Uuid;

use crate::app::{app, AppState};
use crate::auth::{generate_jwt, Claims};
use crate::config::{self, SecurityConfig};
use crate::database::{DatabaseManager, EntityStore, MemoryStore, PgStore};

#[derive(Parser)]
#[command(name = "pokemon-teams-api")]
#[command(about = "Pokemon teams API server and maintenance commands")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to listen on, overrides API_PORT")]
        port: Option<u16>,

        #[arg(long, help = "Keep data in process memory instead of PostgreSQL")]
        memory: bool,
    },

    #[command(about = "Apply database migrations and exit")]
    Migrate,

    #[command(about = "Issue a bearer token for a user id")]
    Token {
        #[arg(help = "User id to place in the token subject")]
        user_id: Uuid,
    },
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command.unwrap_or(Commands::Serve { port: None, memory: false }) {
        Commands::Serve { port, memory } => serve(port, memory).await,
        Commands::Migrate => migrate().await,
        Commands::Token { user_id } => {
            let token = generate_jwt(&Claims::new(user_id))?;
            println!("{}", token);
            Ok(())
        }
    }
}

async fn serve(port: Option<u16>, memory: bool) -> anyhow::Result<()> {
    let config = config::config();
    tracing::info!("Starting Pokemon Teams API in {:?} mode", config.environment);
    require_jwt_secret(&config.security)?;

    let store: Arc<dyn EntityStore> = if memory {
        tracing::warn!("Using in-memory store; data is lost on shutdown");
        Arc::new(MemoryStore::new())
    } else {
        let pool = DatabaseManager::connect(&config.database).await?;
        Arc::new(PgStore::new(pool))
    };

    let state = AppState::new(store, config.teams.capacity_limit);

    let bind_addr = format!("0.0.0.0:{}", port.unwrap_or(config.api.port));
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Refuse to serve when no signing secret is configured
fn require_jwt_secret(security: &SecurityConfig) -> anyhow::Result<()> {
    anyhow::ensure!(
        !security.jwt_secret.trim().is_empty(),
        "JWT_SECRET must be set; every protected request would be rejected without it"
    );
    Ok(())
}

async fn migrate() -> anyhow::Result<()> {
    let mut database = config::config().database.clone();
    database.run_migrations = false;
    let pool = DatabaseManager::connect(&database).await?;
    DatabaseManager::migrate(&pool).await?;
    pool.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
