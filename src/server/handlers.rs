use super::types::{ChatRequest, ChatResponse, ErrorResponse};
use crate::chat::ChatService;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    response::{Html, Json},
};
use chrono::Local;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn chat(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<ChatResponse>, ApiError> {
    if !is_json(&request) {
        return Err(bad_request("Request must be JSON"));
    }

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(internal_error)?;

    let payload: ChatRequest = serde_json::from_slice(&body)
        .map_err(|_| bad_request("Invalid JSON in request body"))?;

    let message = match payload.message {
        Some(message) if !message.is_empty() => message,
        _ => return Err(bad_request("Message cannot be empty")),
    };

    info!("Received chat message of {} characters", message.len());

    let reply = state.chat.respond(&message).await;

    // Only reachable when the model produced an empty candidate; adapter
    // failures come back as the non-empty fallback reply.
    if reply.is_empty() {
        error!("AI service returned an empty response");
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to get response from AI service".to_string(),
            }),
        ));
    }

    Ok(Json(ChatResponse {
        response: reply,
        timestamp: Local::now().format("%H:%M:%S").to_string(),
    }))
}

fn is_json(request: &Request) -> bool {
    let Some(content_type) = request.headers().get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || mime.ends_with("+json")
}

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn internal_error(err: impl std::fmt::Display) -> ApiError {
    error!("Error processing chat request: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Internal server error: {err}"),
        }),
    )
}
