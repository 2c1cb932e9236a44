use crate::llm::{GenerateContentRequest, LlmClient};
use std::sync::Arc;
use tracing::{debug, error};

/// Reply returned to the user whenever the model call fails.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error processing your request.";

pub struct ChatService {
    client: Arc<dyn LlmClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Forwards the raw user message to the model and returns the generated
    /// text. Failures are logged and replaced with [`FALLBACK_REPLY`]; this
    /// method never propagates an error.
    pub async fn respond(&self, message: &str) -> String {
        let request = GenerateContentRequest::from_prompt(message);

        match self.client.generate_content(request).await {
            Ok(response) => match response.text() {
                Some(text) => {
                    debug!("Model returned {} characters", text.len());
                    text.to_string()
                }
                None => {
                    error!("Error getting AI response: model returned no text candidate");
                    FALLBACK_REPLY.to_string()
                }
            },
            Err(e) => {
                error!("Error getting AI response: {}", e);
                FALLBACK_REPLY.to_string()
            }
        }
    }
}
