//! Interaction controller.
//!
//! Turns typed UI actions into API calls, state updates and timers. The session
//! lock is never held across a network round trip, so a slow request does not
//! block other actions; each completion applies its own result when it lands.

mod action;

pub use action::*;

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use tokio::sync::Mutex;

use crate::api::ApiClient;
use crate::config::{Config, LoginFallback};
use crate::errors::ClientError;
use crate::models::User;
use crate::render::render_page;
use crate::state::ViewState;
use crate::ui::{Page, UiState, MODAL_ENTER_DELAY, MODAL_EXIT_DURATION, TOAST_DURATION};

const LOGIN_REQUIRED: &str = "Please log in first.";

/// Backend data plus everything on screen, guarded together.
#[derive(Debug, Default)]
pub struct Session {
    pub view: ViewState,
    pub ui: UiState,
}

/// Dispatches actions against a single UI session.
#[derive(Clone)]
pub struct Controller {
    api: ApiClient,
    config: Arc<Config>,
    session: Arc<Mutex<Session>>,
}

impl Controller {
    pub fn new(api: ApiClient, config: Arc<Config>) -> Self {
        Self {
            api,
            config,
            session: Arc::new(Mutex::new(Session::default())),
        }
    }

    /// Run `f` against the current session.
    pub async fn inspect<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.session.lock().await;
        f(&session)
    }

    /// Render the whole UI as it stands now.
    pub async fn render(&self) -> String {
        let session = self.session.lock().await;
        render_page(
            &session.view,
            &session.ui,
            &self.config.ticket_options,
            Local::now(),
        )
    }

    pub async fn dispatch(&self, action: Action) {
        tracing::debug!(action = action.name(), "Dispatching action");
        match action {
            Action::Login { first_name } => self.login(&first_name).await,
            Action::Signup {
                first_name,
                last_name,
            } => self.signup(first_name, last_name).await,
            Action::Logout => self.logout().await,
            Action::Search { location } => self.search(location).await,
            Action::ShowDetail { event_id } => self.show_detail(event_id).await,
            Action::BackToDashboard => self.back_to_dashboard().await,
            Action::OpenBooking { event_id } => self.open_booking(event_id).await,
            Action::ChangeTicketType { ticket_type } => self.change_ticket_type(&ticket_type).await,
            Action::SubmitBooking {
                event_id,
                ticket_type,
            } => self.submit_booking(event_id, &ticket_type).await,
            Action::CloseBooking => self.close_booking().await,
        }
    }

    /// Show a notice and arm its hide timer.
    fn notify(&self, session: &mut Session, message: impl Into<String>) {
        let generation = session.ui.toast.show(message);
        let handle = Arc::clone(&self.session);
        tokio::spawn(async move {
            tokio::time::sleep(TOAST_DURATION).await;
            handle.lock().await.ui.toast.expire(generation);
        });
    }

    fn notify_error(&self, session: &mut Session, err: &ClientError) {
        tracing::warn!("{}", err);
        self.notify(session, err.notice());
    }

    /// Run `apply` against the session after `delay`.
    fn after(&self, delay: Duration, apply: impl FnOnce(&mut Session) + Send + 'static) {
        let handle = Arc::clone(&self.session);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            apply(&mut *handle.lock().await);
        });
    }

    /// Fetch a fresh dataset and swap it in. On failure the previous dataset
    /// stays and a connectivity notice goes up.
    async fn refresh_dataset(&self) -> bool {
        let result = self.api.fetch_dataset().await;
        let mut session = self.session.lock().await;
        match result {
            Ok(dataset) => {
                session.view.replace_dataset(dataset);
                true
            }
            Err(e) => {
                tracing::error!("Failed to fetch dataset: {}", e);
                self.notify_error(&mut session, &e);
                false
            }
        }
    }

    async fn login(&self, first_name: &str) {
        let first_name = first_name.trim();
        if first_name.is_empty() {
            let mut session = self.session.lock().await;
            self.notify(&mut session, "Error: Please enter your first name.");
            return;
        }

        let fetched = self.refresh_dataset().await;

        let mut session = self.session.lock().await;
        let matched = session.view.dataset().find_user_by_first_name(first_name).cloned();
        let user = match (matched, self.config.login_fallback) {
            (Some(user), _) => user,
            (None, LoginFallback::FirstUser) => session
                .view
                .dataset()
                .users
                .first()
                .cloned()
                .unwrap_or_else(|| User::local(first_name)),
            (None, LoginFallback::Reject) => {
                session.view.clear();
                // A failed fetch already explained itself.
                if fetched {
                    let err = ClientError::Resolution(format!(
                        "No user found with first name \"{}\".",
                        first_name
                    ));
                    self.notify_error(&mut session, &err);
                }
                return;
            }
        };

        tracing::info!(user_id = user.id, "Signed in as {}", user.first_name);
        session.view.set_current_user(user);
        session.ui.search_filter.clear();
        session.ui.detail_event = None;
        session.ui.navigator.show_page(Page::Dashboard);
    }

    async fn signup(&self, first_name: String, last_name: String) {
        {
            let mut session = self.session.lock().await;
            session.ui.signup.first_name = first_name.clone();
            session.ui.signup.last_name = last_name.clone();
        }

        match self.api.create_user(&first_name, &last_name).await {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Created user {} {}", first_name, last_name);
                self.refresh_dataset().await;
                let mut session = self.session.lock().await;
                self.notify(
                    &mut session,
                    format!("User \"{} {}\" created successfully!", first_name, last_name),
                );
                session.ui.signup.clear();
            }
            Err(e) => {
                tracing::error!("Failed to add user: {}", e);
                let mut session = self.session.lock().await;
                self.notify_error(&mut session, &e);
            }
        }
    }

    async fn logout(&self) {
        let mut session = self.session.lock().await;
        if let Some(user) = session.view.current_user() {
            tracing::info!(user_id = user.id, "Signed out");
        }
        session.view.reset();
        session.ui.reset();
    }

    async fn search(&self, location: String) {
        let mut session = self.session.lock().await;
        session.ui.search_filter = location;
    }

    /// Lock the session and return it with the signed-in user's id, or post a
    /// notice and return `None` when nobody is signed in.
    async fn signed_in_session(&self) -> Option<(tokio::sync::MutexGuard<'_, Session>, i64)> {
        let mut session = self.session.lock().await;
        let user_id = session.view.current_user().map(|u| u.id);
        if let Some(user_id) = user_id {
            return Some((session, user_id));
        }
        let err = ClientError::Session(LOGIN_REQUIRED.to_string());
        self.notify_error(&mut session, &err);
        session.ui.navigator.show_page(Page::Login);
        None
    }

    async fn show_detail(&self, event_id: i64) {
        let Some((mut session, _)) = self.signed_in_session().await else {
            return;
        };
        if session.view.dataset().find_event(event_id).is_none() {
            let err = ClientError::Resolution(format!("Event {} not found.", event_id));
            self.notify_error(&mut session, &err);
            return;
        }
        session.ui.detail_event = Some(event_id);
        session.ui.navigator.show_page(Page::Detail);
    }

    async fn back_to_dashboard(&self) {
        let Some((mut session, _)) = self.signed_in_session().await else {
            return;
        };
        session.ui.navigator.show_page(Page::Dashboard);
    }

    async fn open_booking(&self, event_id: i64) {
        let Some((mut session, _)) = self.signed_in_session().await else {
            return;
        };
        if session.view.dataset().find_event(event_id).is_none() {
            let err = ClientError::Resolution(format!("Event {} not found.", event_id));
            self.notify_error(&mut session, &err);
            return;
        }

        let generation = session.ui.modal.open(event_id, &self.config.ticket_options);
        self.after(MODAL_ENTER_DELAY, move |s| {
            s.ui.modal.finish_enter(generation);
        });
    }

    async fn change_ticket_type(&self, ticket_type: &str) {
        let mut session = self.session.lock().await;
        if !session.ui.modal.select(ticket_type, &self.config.ticket_options) {
            let err = ClientError::Resolution(format!("Unknown ticket type \"{}\".", ticket_type));
            self.notify_error(&mut session, &err);
        }
    }

    async fn submit_booking(&self, event_id: i64, ticket_type: &str) {
        let (user_id, price) = {
            let Some((mut session, user_id)) = self.signed_in_session().await else {
                return;
            };
            if session.view.dataset().find_event(event_id).is_none() {
                let err = ClientError::Resolution(format!("Event {} not found.", event_id));
                self.notify_error(&mut session, &err);
                return;
            }
            let Some(option) = self
                .config
                .ticket_options
                .iter()
                .find(|o| o.name == ticket_type)
            else {
                let err =
                    ClientError::Resolution(format!("Unknown ticket type \"{}\".", ticket_type));
                self.notify_error(&mut session, &err);
                return;
            };
            (user_id, option.price)
        };

        match self.api.book_ticket(user_id, event_id, ticket_type, price).await {
            Ok(_) => {
                tracing::info!(user_id, event_id, ticket_type, "Booked ticket");
                self.refresh_dataset().await;
                let mut session = self.session.lock().await;
                self.notify(
                    &mut session,
                    format!("Successfully booked a {} ticket!", ticket_type),
                );
                self.begin_close(&mut session);
            }
            Err(e) => {
                tracing::error!("Failed to book ticket: {}", e);
                let mut session = self.session.lock().await;
                self.notify_error(&mut session, &e);
            }
        }
    }

    async fn close_booking(&self) {
        let mut session = self.session.lock().await;
        self.begin_close(&mut session);
    }

    fn begin_close(&self, session: &mut Session) {
        let generation = session.ui.modal.close();
        self.after(MODAL_EXIT_DURATION, move |s| {
            s.ui.modal.finish_close(generation);
        });
    }
}
