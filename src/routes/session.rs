//! Login, signup and logout endpoints.

use axum::{extract::State, response::Redirect, Form};
use serde::Deserialize;

use super::dispatch_and_redirect;
use crate::controller::Action;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "login-fname", default)]
    pub first_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(rename = "signup-fname", default)]
    pub first_name: String,
    #[serde(rename = "signup-lname", default)]
    pub last_name: String,
}

/// POST /login - Sign in by first name.
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginRequest>) -> Redirect {
    dispatch_and_redirect(
        &state,
        Action::Login {
            first_name: form.first_name,
        },
    )
    .await
}

/// POST /signup - Create a user.
pub async fn signup(State(state): State<AppState>, Form(form): Form<SignupRequest>) -> Redirect {
    dispatch_and_redirect(
        &state,
        Action::Signup {
            first_name: form.first_name,
            last_name: form.last_name,
        },
    )
    .await
}

/// POST /logout - Forget the user and the dataset.
pub async fn logout(State(state): State<AppState>) -> Redirect {
    dispatch_and_redirect(&state, Action::Logout).await
}
