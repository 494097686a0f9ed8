//! Notice banner.

use super::escape_html;
use crate::ui::Toast;

pub fn render_toast(toast: &Toast) -> String {
    let state = if toast.is_visible() {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-10"
    };
    format!(
        r#"<div id="toast" class="toast {}" role="status"><span id="toast-message">{}</span></div>"#,
        state,
        escape_html(toast.message())
    )
}
