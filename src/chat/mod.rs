mod service;

pub use service::{ChatService, FALLBACK_REPLY};
