use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BleuError {
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl BleuError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
