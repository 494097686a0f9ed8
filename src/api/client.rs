//! HTTP client for the ticketing backend.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ErrorBody, BOOK_TICKET_PATH, DATA_PATH, USERS_PATH};
use crate::errors::ClientError;
use crate::models::{BookTicketRequest, BookingReceipt, CreateUserRequest, Dataset, User};

/// Client for the ticketing API. One round trip per call, no retries.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/data - Fetch the full dataset.
    ///
    /// Any failure, including a body that does not decode, is a network error.
    pub async fn fetch_dataset(&self) -> Result<Dataset, ClientError> {
        let response = self.client.get(self.url(DATA_PATH)).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("GET {} returned {}", DATA_PATH, status);
            return Err(ClientError::Network(format!(
                "Network response was not ok: {}",
                status
            )));
        }

        let dataset: Dataset = response.json().await?;
        tracing::debug!(
            users = dataset.users.len(),
            events = dataset.events.len(),
            tickets = dataset.tickets.len(),
            "Dataset fetched from backend"
        );
        Ok(dataset)
    }

    /// POST /api/users - Create a user.
    pub async fn create_user(&self, first_name: &str, last_name: &str) -> Result<User, ClientError> {
        let request = CreateUserRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };
        let response = self
            .client
            .post(self.url(USERS_PATH))
            .json(&request)
            .send()
            .await?;

        let user: User = decode_mutation(USERS_PATH, response).await?;
        tracing::debug!(user_id = user.id, "User created");
        Ok(user)
    }

    /// POST /api/book_ticket - Book a ticket for a user.
    pub async fn book_ticket(
        &self,
        user_id: i64,
        event_id: i64,
        ticket_type: &str,
        price: f64,
    ) -> Result<BookingReceipt, ClientError> {
        let request = BookTicketRequest {
            user_id,
            event_id,
            ticket_type: ticket_type.to_string(),
            price,
        };
        let response = self
            .client
            .post(self.url(BOOK_TICKET_PATH))
            .json(&request)
            .send()
            .await?;

        let receipt: BookingReceipt = decode_mutation(BOOK_TICKET_PATH, response).await?;
        tracing::debug!(user_id, event_id, ticket_type, "Ticket booked");
        Ok(receipt)
    }
}

/// Decode a mutation response, turning a non-success status into an API error
/// that carries the server's reason.
async fn decode_mutation<T: DeserializeOwned>(
    path: &str,
    response: Response,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });
        tracing::warn!("POST {} rejected with {}: {}", path, status, message);
        return Err(ClientError::Api(message));
    }

    Ok(serde_json::from_slice(&body)?)
}
