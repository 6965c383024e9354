//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use generator_core::EmailGenerator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Email template generator.
    pub generator: Arc<dyn EmailGenerator>,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, generator: Arc<dyn EmailGenerator>) -> Self {
        Self { db, generator }
    }
}
