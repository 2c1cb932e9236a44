pub mod handlers;
pub mod types;

use crate::{Result, chat::ChatService, config::Config, llm::VertexAiClient};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

pub fn router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/chat", post(handlers::chat))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the model client and the chat service around it
    let client = Arc::new(VertexAiClient::new(config.vertex.clone()));
    let chat = Arc::new(ChatService::new(client));

    let app = router(handlers::AppState { chat });

    // Start server
    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
