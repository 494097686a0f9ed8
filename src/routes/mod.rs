//! Front-end HTTP surface.
//!
//! Every route translates a request into an [`Action`], hands it to the
//! controller and redirects back to `/`, which renders whatever page is current.

mod booking;
mod events;
mod session;

pub use booking::*;
pub use events::*;
pub use session::*;

use axum::{
    extract::State,
    response::{Html, Redirect},
};

use crate::controller::Action;
use crate::AppState;

/// GET / - Render the current page.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.controller.render().await)
}

/// Dispatch `action` and send the browser back to `/` (303 See Other).
async fn dispatch_and_redirect(state: &AppState, action: Action) -> Redirect {
    state.controller.dispatch(action).await;
    Redirect::to("/")
}
