use thiserror::Error;

use crate::defs::GenerationRequest;

pub const MAX_TOPIC_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} '{literal}'")]
pub struct ParseLiteralError {
    pub field: &'static str,
    pub literal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Topic is too long. Try focusing on a key theme.")]
    TopicTooLong { chars: usize },
}

impl GenerationRequest {
    /// Trims the topic and enforces the length cap. Everything downstream
    /// assumes a request that has been through here.
    pub fn validate(mut self) -> Result<Self, RequestError> {
        let trimmed = self.topic.trim();
        let chars = trimmed.chars().count();
        if chars > MAX_TOPIC_CHARS {
            return Err(RequestError::TopicTooLong { chars });
        }
        if trimmed.len() != self.topic.len() {
            self.topic = trimmed.to_owned();
        }
        Ok(self)
    }
}
