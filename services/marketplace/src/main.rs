use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

mod error;
mod middleware;
mod models;
mod notify;
mod password;
mod repositories;
mod routes;
mod state;
mod token;
mod validation;

use common::database::{DatabaseConfig, health_check, init_pool};

use crate::state::AppState;
use crate::token::{TokenConfig, TokenService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!("Starting marketplace service");

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    sqlx::migrate!().run(&pool).await?;
    info!("Database migrations applied");

    // Initialize the token service
    let token_config = TokenConfig::from_env()?;
    let tokens = TokenService::new(&token_config);

    let app_state = AppState::new(pool, tokens);

    // Start the web server
    let app = routes::create_router(app_state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Marketplace service listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
