//! Ticketing API client.
//!
//! Contains the HTTP client for the three backend endpoints and the error envelope they share.

mod client;

pub use client::*;

use serde::Deserialize;

pub const DATA_PATH: &str = "/api/data";
pub const USERS_PATH: &str = "/api/users";
pub const BOOK_TICKET_PATH: &str = "/api/book_ticket";

/// Error envelope returned by the backend with a non-success status.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
