mod client;
mod types;

pub use client::{LlmClient, VertexAiClient};
pub use types::*;
