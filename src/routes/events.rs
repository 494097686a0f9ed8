//! Dashboard, search and event detail endpoints.

use axum::{
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;

use super::dispatch_and_redirect;
use crate::controller::Action;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub location: String,
}

/// GET /search?location= - Filter the event list by city.
pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Redirect {
    dispatch_and_redirect(
        &state,
        Action::Search {
            location: query.location,
        },
    )
    .await
}

/// GET /dashboard - Back to the event list.
pub async fn dashboard(State(state): State<AppState>) -> Redirect {
    dispatch_and_redirect(&state, Action::BackToDashboard).await
}

/// GET /events/{id} - Show one event.
pub async fn show_event(State(state): State<AppState>, Path(event_id): Path<i64>) -> Redirect {
    dispatch_and_redirect(&state, Action::ShowDetail { event_id }).await
}
