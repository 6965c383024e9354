//! HTTP API for the LeadGen email assistant.
//!
//! Exposes template generation, lead creation, and template persistence as a
//! JSON API backed by SQLite and the Gemini generation service.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use database::Database;
use gemini_generator::GeminiGenerator;
use generator_core::EmailGenerator;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting LeadGen API server");

    // Connect to database and ensure the schema exists
    let db = Database::connect(&config.database_url).await?;
    db.init_schema().await?;

    // Set up the generation adapter
    let generator = GeminiGenerator::from_env()?;
    info!(generator = generator.name(), "Generator ready");

    // Build application state
    let state = AppState::new(db, Arc::new(generator));

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "LeadGen API listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
