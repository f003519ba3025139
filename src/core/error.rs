use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    InvalidInput(String),
    Domain(String),
    Overflow(String),
    LimitExceeded(String),
}

impl fmt::Display for NumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            NumberError::Domain(msg) => write!(f, "Domain error: {}", msg),
            NumberError::Overflow(msg) => write!(f, "Overflow: {}", msg),
            NumberError::LimitExceeded(msg) => write!(f, "Limit exceeded: {}", msg),
        }
    }
}

impl std::error::Error for NumberError {}

impl NumberError {
    pub fn invalid_input(message: &str) -> Self { NumberError::InvalidInput(message.to_string()) }
    pub fn domain(message: &str) -> Self { NumberError::Domain(message.to_string()) }
    pub fn overflow(message: &str) -> Self { NumberError::Overflow(message.to_string()) }
    pub fn limit_exceeded(message: &str) -> Self { NumberError::LimitExceeded(message.to_string()) }

    /// True for errors caused by what the user typed, as opposed to a
    /// computation that could not be carried out.
    pub fn is_input_error(&self) -> bool {
        matches!(self, NumberError::InvalidInput(_))
    }
}
