//! HTML renderers.
//!
//! Pure functions from state to markup; nothing in here touches the network or mutates state.

mod event_detail;
mod event_list;
mod modal;
mod page;
mod toast;

pub use event_detail::*;
pub use event_list::*;
pub use modal::*;
pub use page::*;
pub use toast::*;

/// Date shown on event cards, e.g. `Fri Oct 17 2025`.
pub const CARD_DATE_FORMAT: &str = "%a %b %d %Y";
/// Start time shown on the detail page, e.g. `17/10/2025, 18:30:00`.
pub const DETAIL_TIME_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Escape text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Rupee amount with two decimals.
pub fn format_currency(amount: f64) -> String {
    format!("₹{:.2}", amount)
}
