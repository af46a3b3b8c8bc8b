//! Handler for the home page.
//!
//! Renders the welcome banner with the version string configured at
//! startup, which is how an operator tells the blue and green instances
//! apart in a browser.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::HOME_TEMPLATE;

/// Home page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("version", &state.config.version);

    let html = state.tera.render(HOME_TEMPLATE, &context)?;
    Ok(Html(html))
}
