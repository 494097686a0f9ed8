//! Top-level page switching.

/// The three mutually exclusive pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Login,
    Dashboard,
    Detail,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Login, Page::Dashboard, Page::Detail];

    /// Element id of the page container.
    pub fn id(&self) -> &'static str {
        match self {
            Page::Login => "login-page",
            Page::Dashboard => "dashboard-page",
            Page::Detail => "detail-page",
        }
    }
}

/// Shows exactly one page at a time. There is no history stack.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Page,
}

impl Navigator {
    pub fn current(&self) -> Page {
        self.current
    }

    pub fn show_page(&mut self, page: Page) {
        tracing::debug!(page = page.id(), "Showing page");
        self.current = page;
    }

    pub fn is_visible(&self, page: Page) -> bool {
        self.current == page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_login() {
        let nav = Navigator::default();
        assert_eq!(nav.current(), Page::Login);
    }

    #[test]
    fn test_exactly_one_page_visible() {
        let mut nav = Navigator::default();
        for target in Page::ALL {
            nav.show_page(target);
            let visible: Vec<Page> = Page::ALL.into_iter().filter(|p| nav.is_visible(*p)).collect();
            assert_eq!(visible, vec![target]);
        }
    }
}
