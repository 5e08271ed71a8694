use std::net::SocketAddr;
use std::sync::Arc;

use embark_api::{app, AppState};
use embark_core::layout::LayoutRegistry;
use embark_store::{DbClient, PostgresCheckinRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "embark_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = embark_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Embark API on port {}", config.server.port);

    let db = DbClient::new(&config.database)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let repo = Arc::new(PostgresCheckinRepository::new(db.pool.clone()));
    let state = AppState::new(repo, LayoutRegistry::default());

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
