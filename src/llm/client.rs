use super::types::{GenerateContentRequest, GenerateContentResponse};
use crate::{Error, Result, config::VertexConfig};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse>;
}

pub struct VertexAiClient {
    client: reqwest::Client,
    url: String,
}

impl VertexAiClient {
    pub fn new(config: VertexConfig) -> Self {
        let mut url = format!(
            "{}/v1/projects/{}/locations/{}/publishers/google/models/{}:generateContent",
            config.base_url(),
            config.project_id,
            config.location,
            config.model
        );

        if let Some(api_key) = &config.api_key {
            url.push_str("?key=");
            url.push_str(api_key);
        }

        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl LlmClient for VertexAiClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        debug!(
            "Sending generateContent request with {} contents",
            request.contents.len()
        );

        let response = self.client.post(&self.url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::llm(format!(
                "Vertex AI returned {status}: {body}"
            )));
        }

        let response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::llm(format!("Failed to parse Vertex AI response: {e}")))?;

        debug!(
            "Received generateContent response with {} candidates",
            response.candidates.len()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn create_test_config() -> VertexConfig {
        VertexConfig {
            project_id: "test-project".to_string(),
            location: "us-central1".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            endpoint: None,
        }
    }

    #[test]
    fn test_client_url_from_config() {
        let client = VertexAiClient::new(create_test_config());

        assert_eq!(
            client.url,
            "https://us-central1-aiplatform.googleapis.com/v1/projects/test-project/locations/us-central1/publishers/google/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn test_client_url_appends_api_key() {
        let mut config = create_test_config();
        config.api_key = Some("secret".to_string());

        let client = VertexAiClient::new(config);
        assert!(client.url.ends_with(":generateContent?key=secret"));
    }

    #[test]
    fn test_client_url_with_endpoint_override() {
        let mut config = create_test_config();
        config.endpoint = Some("http://localhost:8123".to_string());

        let client = VertexAiClient::new(config);
        assert!(client.url.starts_with("http://localhost:8123/v1/projects/"));
    }

    #[test]
    fn test_request_from_prompt_serialization() {
        let request = GenerateContentRequest::from_prompt("Hello there");
        let serialized = serde_json::to_value(&request).unwrap();

        assert_eq!(
            serialized,
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [{"text": "Hello there"}]
                }]
            })
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Hi! How can I help?"}]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 3,
                "candidatesTokenCount": 7,
                "totalTokenCount": 10
            }
        }))
        .unwrap();

        assert_eq!(response.text(), Some("Hi! How can I help?"));
        assert_eq!(response.usage_metadata.unwrap().total_token_count, Some(10));
    }

    #[test]
    fn test_response_text_missing_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();

        assert!(response.candidates.is_empty());
        assert_eq!(response.text(), None);
    }
}
