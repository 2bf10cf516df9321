use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PagerError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl PagerError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
