//! Booking modal endpoints.

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use serde::Deserialize;

use super::dispatch_and_redirect;
use crate::controller::Action;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TicketTypeRequest {
    #[serde(rename = "booking-ticket-type")]
    pub ticket_type: String,
}

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    #[serde(rename = "booking-event-id")]
    pub event_id: i64,
    #[serde(rename = "booking-ticket-type")]
    pub ticket_type: String,
}

/// GET /events/{id}/book - Open the booking modal for an event.
pub async fn open_booking(State(state): State<AppState>, Path(event_id): Path<i64>) -> Redirect {
    dispatch_and_redirect(&state, Action::OpenBooking { event_id }).await
}

/// POST /booking/ticket-type - Pick a ticket type and reprice.
pub async fn change_ticket_type(
    State(state): State<AppState>,
    Form(form): Form<TicketTypeRequest>,
) -> Redirect {
    dispatch_and_redirect(
        &state,
        Action::ChangeTicketType {
            ticket_type: form.ticket_type,
        },
    )
    .await
}

/// POST /booking - Submit the booking.
pub async fn submit_booking(
    State(state): State<AppState>,
    Form(form): Form<BookingRequest>,
) -> Redirect {
    dispatch_and_redirect(
        &state,
        Action::SubmitBooking {
            event_id: form.event_id,
            ticket_type: form.ticket_type,
        },
    )
    .await
}

/// POST /booking/cancel - Close the modal.
pub async fn cancel_booking(State(state): State<AppState>) -> Redirect {
    dispatch_and_redirect(&state, Action::CloseBooking).await
}
