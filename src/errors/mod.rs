//! Error handling module for the ticketing front end.
//!
//! Provides the client error taxonomy and its mapping to user-visible notices.

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const API_ERROR: &str = "API_ERROR";
    pub const RESOLUTION_ERROR: &str = "RESOLUTION_ERROR";
    pub const SESSION_ERROR: &str = "SESSION_ERROR";
    pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
}

/// Notice shown whenever the backend cannot be reached.
pub const CONNECTIVITY_NOTICE: &str = "Error: Could not connect to the backend.";

/// Front-end error type.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Transport failure, non-success status or undecodable body
    Network(String),
    /// Mutation rejected by the server, with its reason
    Api(String),
    /// A reference into the dataset that points at nothing
    Resolution(String),
    /// Action requires a signed-in user
    Session(String),
    /// Invalid configuration
    Config(String),
}

impl ClientError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Network(_) => codes::NETWORK_ERROR,
            ClientError::Api(_) => codes::API_ERROR,
            ClientError::Resolution(_) => codes::RESOLUTION_ERROR,
            ClientError::Session(_) => codes::SESSION_ERROR,
            ClientError::Config(_) => codes::CONFIG_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            ClientError::Network(msg) => msg.clone(),
            ClientError::Api(msg) => msg.clone(),
            ClientError::Resolution(msg) => msg.clone(),
            ClientError::Session(msg) => msg.clone(),
            ClientError::Config(msg) => msg.clone(),
        }
    }

    /// Text of the toast shown for this error.
    ///
    /// Network failures collapse into one generic connectivity notice; every
    /// other error is surfaced verbatim.
    pub fn notice(&self) -> String {
        match self {
            ClientError::Network(_) => CONNECTIVITY_NOTICE.to_string(),
            other => format!("Error: {}", other.message()),
        }
    }
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Transport error: {:?}", err);
        ClientError::Network(format!("Transport error: {}", err))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ClientError::Network(format!("JSON error: {}", err))
    }
}
