//! Full document: the three pages, the notice and the booking modal.

use chrono::{DateTime, Local};

use super::{
    escape_html, render_booking_modal, render_event_detail, render_event_list, render_toast,
    resolve_event_detail,
};
use crate::models::TicketOption;
use crate::state::ViewState;
use crate::ui::{Page, UiState};

fn page_class(ui: &UiState, page: Page) -> &'static str {
    if ui.navigator.is_visible(page) {
        "page"
    } else {
        "page hidden"
    }
}

fn render_login_page(ui: &UiState) -> String {
    format!(
        r#"<section id="{id}" class="{class}">
    <h1>Event Tickets</h1>
    <form id="login-form" method="post" action="/login">
        <label for="login-fname">First name</label>
        <input id="login-fname" name="login-fname" required>
        <button type="submit">Log in</button>
    </form>
    <h2>New here?</h2>
    <form id="add-user-form" method="post" action="/signup">
        <input id="signup-fname" name="signup-fname" placeholder="First name" value="{first}" required>
        <input id="signup-lname" name="signup-lname" placeholder="Last name" value="{last}" required>
        <button type="submit">Sign up</button>
    </form>
</section>"#,
        id = Page::Login.id(),
        class = page_class(ui, Page::Login),
        first = escape_html(&ui.signup.first_name),
        last = escape_html(&ui.signup.last_name),
    )
}

fn render_dashboard_page(view: &ViewState, ui: &UiState, now: DateTime<Local>) -> String {
    let welcome = view
        .current_user()
        .map(|u| format!("Welcome, {}!", escape_html(&u.first_name)))
        .unwrap_or_default();

    format!(
        r#"<section id="{id}" class="{class}">
    <header>
        <h1 id="welcome-message">{welcome}</h1>
        <form method="post" action="/logout"><button id="logout-button" type="submit">Log out</button></form>
    </header>
    <form id="search-form" method="get" action="/search">
        <input id="location-search" name="location" placeholder="Search by city" value="{filter}">
        <button id="search-button" type="submit">Search</button>
    </form>
    {events}
</section>"#,
        id = Page::Dashboard.id(),
        class = page_class(ui, Page::Dashboard),
        welcome = welcome,
        filter = escape_html(&ui.search_filter),
        events = render_event_list(&view.dataset().events, &ui.search_filter, now),
    )
}

fn render_detail_page(view: &ViewState, ui: &UiState) -> String {
    // Only the visible detail page resolves its event; a stale id on a hidden
    // page must not fail the whole document.
    let body = match ui.detail_event {
        Some(event_id) if ui.navigator.is_visible(Page::Detail) => {
            match resolve_event_detail(view.dataset(), event_id) {
                Ok(detail) => render_event_detail(&detail),
                Err(e) => format!(r#"<p class="placeholder">{}</p>"#, escape_html(&e.message())),
            }
        }
        _ => String::new(),
    };

    format!(
        r#"<section id="{id}" class="{class}">
    <a id="back-to-dashboard" href="/dashboard">Back to events</a>
    {body}
</section>"#,
        id = Page::Detail.id(),
        class = page_class(ui, Page::Detail),
        body = body,
    )
}

/// Render the whole UI for the current state.
pub fn render_page(
    view: &ViewState,
    ui: &UiState,
    options: &[TicketOption],
    now: DateTime<Local>,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Event Tickets</title>
</head>
<body>
{login}
{dashboard}
{detail}
{modal}
{toast}
</body>
</html>
"#,
        login = render_login_page(ui),
        dashboard = render_dashboard_page(view, ui, now),
        detail = render_detail_page(view, ui),
        modal = render_booking_modal(&ui.modal, options),
        toast = render_toast(&ui.toast),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dataset, User};

    #[test]
    fn test_only_current_page_visible() {
        let view = ViewState::new();
        let mut ui = UiState::default();

        let html = render_page(&view, &ui, &[], Local::now());
        assert!(html.contains(r#"id="login-page" class="page""#));
        assert!(html.contains(r#"id="dashboard-page" class="page hidden""#));
        assert!(html.contains(r#"id="detail-page" class="page hidden""#));

        ui.navigator.show_page(Page::Dashboard);
        let html = render_page(&view, &ui, &[], Local::now());
        assert!(html.contains(r#"id="login-page" class="page hidden""#));
        assert!(html.contains(r#"id="dashboard-page" class="page""#));
    }

    #[test]
    fn test_welcome_message_and_signup_draft() {
        let mut view = ViewState::new();
        view.replace_dataset(Dataset::default());
        view.set_current_user(User {
            id: 1,
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
        });
        let mut ui = UiState::default();
        ui.signup.first_name = "Meera".to_string();
        ui.signup.last_name = "Iyer".to_string();

        let html = render_page(&view, &ui, &[], Local::now());
        assert!(html.contains("Welcome, Asha!"));
        assert!(html.contains(r#"value="Meera""#));
        assert!(html.contains(r#"value="Iyer""#));
    }
}
