use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Network(String),
    /// Backend answered with an envelope carrying `success: false`.
    Backend(String),
    Auth(String),
    Unauthorized(String),
    NotFound(String),
    InvalidInput(String),
    ValidationError(String),
    ConfigurationError(String),
    SerializationError(String),
    DeserializationError(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Backend(msg) => write!(f, "Backend error: {}", msg),
            AppError::Auth(msg) => write!(f, "Auth error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            AppError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Stable machine-readable code, surfaced through `ApiResponse` and logs.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Network(_) => "network",
            AppError::Backend(_) => "backend",
            AppError::Auth(_) => "auth",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::NotFound(_) => "not_found",
            AppError::InvalidInput(_) => "invalid_input",
            AppError::ValidationError(_) => "validation",
            AppError::ConfigurationError(_) => "configuration",
            AppError::SerializationError(_) => "serialization",
            AppError::DeserializationError(_) => "deserialization",
            AppError::Internal(_) => "internal",
        }
    }

    /// Message suitable for a transient notification in the UI.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Network(_) => "Could not reach the server. Please try again.".to_string(),
            AppError::Backend(msg) => msg.clone(),
            AppError::Auth(_) | AppError::Unauthorized(_) => {
                "You are not allowed to perform this action.".to_string()
            }
            AppError::NotFound(msg) => msg.clone(),
            AppError::InvalidInput(msg) | AppError::ValidationError(msg) => msg.clone(),
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}

impl From<Box<dyn std::error::Error>> for AppError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for AppError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Internal(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DeserializationError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
