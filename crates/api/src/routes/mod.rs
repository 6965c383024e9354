//! Route handlers for the LeadGen API.

pub mod generate;
pub mod leads;
pub mod root;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root::describe))
        .route("/generate_template", post(generate::generate_template))
        .route("/leads", post(leads::create_lead))
        .route("/templates", post(templates::create_template))
}
