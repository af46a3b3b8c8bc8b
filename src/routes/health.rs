//! Health check endpoint for the load balancer steering blue/green traffic.
//!
//! Returns 200 OK with the deployed version whenever the process is able to
//! respond to HTTP. An external orchestrator uses this signal to decide
//! which instance is live; this service only exposes it.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
}

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond
/// to HTTP, and reports the version so the orchestrator can tell which
/// deployment color is serving.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        version: state.config.version.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::templates::init_templates;

    #[tokio::test]
    async fn reports_ok_with_configured_version() {
        let config = AppConfig {
            port: 3000,
            version: "v2-green".to_string(),
        };
        let state = AppState::new(config, init_templates().unwrap());

        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "OK");
        assert_eq!(body.version, "v2-green");
    }

    #[test]
    fn serializes_to_expected_shape() {
        let payload = HealthResponse {
            status: "OK",
            version: "v1".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value, serde_json::json!({"status": "OK", "version": "v1"}));
    }
}
