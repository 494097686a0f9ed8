//! Typed UI actions.

/// Something the user did. The web layer builds these from form posts and links.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Login { first_name: String },
    Signup { first_name: String, last_name: String },
    Logout,
    Search { location: String },
    ShowDetail { event_id: i64 },
    BackToDashboard,
    OpenBooking { event_id: i64 },
    ChangeTicketType { ticket_type: String },
    SubmitBooking { event_id: i64, ticket_type: String },
    CloseBooking,
}

impl Action {
    /// Short name for logs. Never includes user input.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Login { .. } => "login",
            Action::Signup { .. } => "signup",
            Action::Logout => "logout",
            Action::Search { .. } => "search",
            Action::ShowDetail { .. } => "show_detail",
            Action::BackToDashboard => "back_to_dashboard",
            Action::OpenBooking { .. } => "open_booking",
            Action::ChangeTicketType { .. } => "change_ticket_type",
            Action::SubmitBooking { .. } => "submit_booking",
            Action::CloseBooking => "close_booking",
        }
    }
}
