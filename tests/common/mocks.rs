use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use vertex_chat::{
    Error, Result,
    llm::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, LlmClient, Part},
};

/// Mock LLM client for testing
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<GenerateContentResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

// Helper functions for creating test data

pub fn create_mock_response(content: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Content {
                role: Some("model".to_string()),
                parts: vec![Part {
                    text: content.to_string(),
                }],
            },
            finish_reason: Some("STOP".to_string()),
        }],
        usage_metadata: None,
    }
}

pub fn create_empty_response() -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![],
        usage_metadata: None,
    }
}
