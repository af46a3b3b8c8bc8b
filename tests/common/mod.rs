#![allow(dead_code)]

use tokio::net::TcpListener;

use bluegreen::config::AppConfig;
use bluegreen::routes::create_router;
use bluegreen::state::AppState;
use bluegreen::templates::init_templates;

/// Spawns the application with the given version on an ephemeral port and
/// returns its base address.
///
/// Returned address format: `http://127.0.0.1:49152`
pub async fn spawn_app(version: &str) -> String {
    // The listener below picks its own port, so the configured one is idle
    let config = AppConfig {
        port: 0,
        version: version.to_string(),
    };

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port at localhost");
    let port = listener.local_addr().unwrap().port();

    let app = create_router(AppState::new(config, init_templates().unwrap()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{port}")
}
