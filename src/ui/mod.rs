//! Client-side UI state: which page is up, the notice, the booking modal and form drafts.

mod modal;
mod navigation;
mod toast;

pub use modal::*;
pub use navigation::*;
pub use toast::*;

/// Values typed into the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
}

impl SignupForm {
    pub fn clear(&mut self) {
        self.first_name.clear();
        self.last_name.clear();
    }
}

/// Everything on screen that is not backend data.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub navigator: Navigator,
    pub toast: Toast,
    pub modal: BookingModal,
    pub signup: SignupForm,
    /// Location typed into the dashboard search box
    pub search_filter: String,
    /// Event shown on the detail page
    pub detail_event: Option<i64>,
}

impl UiState {
    /// Back to the login page with no page-specific leftovers. The notice is kept.
    pub fn reset(&mut self) {
        self.navigator.show_page(Page::Login);
        self.modal.dismiss();
        self.search_filter.clear();
        self.detail_event = None;
    }
}
