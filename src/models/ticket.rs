//! Ticket model and booking request/response bodies.

use serde::{Deserialize, Deserializer, Serialize};

/// A sold ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "TicketID")]
    pub id: i64,
    #[serde(rename = "EventID")]
    pub event_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "Price", deserialize_with = "deserialize_price")]
    pub price: f64,
}

/// Request body for booking a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookTicketRequest {
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "EventID")]
    pub event_id: i64,
    #[serde(rename = "TicketType")]
    pub ticket_type: String,
    #[serde(rename = "Price")]
    pub price: f64,
}

/// Success body of a booking. The backend only promises a message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "TicketID", default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<i64>,
}

/// A ticket type offered in the booking modal.
#[derive(Debug, Clone, PartialEq)]
pub struct TicketOption {
    pub name: String,
    pub price: f64,
}

/// Decimal columns arrive either as JSON numbers or as numeric strings.
fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(n) => Ok(n),
        RawPrice::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid price: {}", s))),
    }
}
