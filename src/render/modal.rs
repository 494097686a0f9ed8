//! Booking modal markup.

use super::{escape_html, format_currency};
use crate::models::TicketOption;
use crate::ui::BookingModal;

pub fn render_booking_modal(modal: &BookingModal, options: &[TicketOption]) -> String {
    let hidden = if modal.is_visible() { "" } else { " hidden" };
    let selected = modal.selected(options).map(|o| o.name.as_str());

    let choices = options
        .iter()
        .map(|o| {
            format!(
                r#"<option value="{name}" data-price="{price:.2}"{sel}>{name} ({display})</option>"#,
                name = escape_html(&o.name),
                price = o.price,
                display = format_currency(o.price),
                sel = if Some(o.name.as_str()) == selected { " selected" } else { "" },
            )
        })
        .collect::<Vec<_>>()
        .join("");

    let event_id = modal.event_id().map(|id| id.to_string()).unwrap_or_default();

    format!(
        r#"<div id="booking-modal" class="modal-backdrop{hidden}">
    <div class="modal {scale}">
        <h3>Book Ticket</h3>
        <form id="booking-type-form" method="post" action="/booking/ticket-type">
            <label for="booking-ticket-type">Ticket type</label>
            <select id="booking-ticket-type" name="booking-ticket-type">{choices}</select>
            <button type="submit">Update price</button>
        </form>
        <form id="booking-form" method="post" action="/booking">
            <input type="hidden" id="booking-event-id" name="booking-event-id" value="{event_id}">
            <input type="hidden" name="booking-ticket-type" value="{ticket_type}">
            <p>Price: <span id="booking-price">{price}</span></p>
            <button type="submit">Confirm Booking</button>
        </form>
        <form method="post" action="/booking/cancel"><button id="cancel-booking" type="submit">Cancel</button></form>
    </div>
</div>"#,
        hidden = hidden,
        scale = modal.scale_class(),
        choices = choices,
        event_id = event_id,
        ticket_type = selected.map(escape_html).unwrap_or_default(),
        price = format_currency(modal.displayed_price()),
    )
}
