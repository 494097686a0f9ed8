//! Dashboard event list.

use chrono::{DateTime, Local};

use super::{escape_html, CARD_DATE_FORMAT};
use crate::models::Event;

pub const NO_EVENTS_FOUND: &str = "No events found for this location.";
pub const NO_ONGOING_EVENTS: &str = "No events are currently ongoing.";

/// Events split for display.
#[derive(Debug)]
pub struct EventListing<'a> {
    /// Events running right now; `None` while a location filter is active
    pub ongoing: Option<Vec<&'a Event>>,
    /// Everything else that passed the filter
    pub other: Vec<&'a Event>,
}

impl EventListing<'_> {
    /// Whether nothing passed the filter at all.
    pub fn is_empty(&self) -> bool {
        self.other.is_empty() && self.ongoing.as_ref().map_or(true, |o| o.is_empty())
    }
}

/// The filter in effect, if any. Blank input means no filter.
pub fn active_filter(location: &str) -> Option<&str> {
    let location = location.trim();
    (!location.is_empty()).then_some(location)
}

/// Filter events by city and split out the ongoing ones.
///
/// Each event lands in exactly one bucket. Ongoing events are only grouped
/// when no filter is active.
pub fn partition_events<'a>(
    events: &'a [Event],
    location: &str,
    now: DateTime<Local>,
) -> EventListing<'a> {
    match active_filter(location) {
        Some(filter) => EventListing {
            ongoing: None,
            other: events.iter().filter(|e| e.city_matches(filter)).collect(),
        },
        None => {
            let (ongoing, other): (Vec<&Event>, Vec<&Event>) =
                events.iter().partition(|e| e.is_ongoing_at(now));
            EventListing {
                ongoing: Some(ongoing),
                other,
            }
        }
    }
}

/// Markup for one event card.
pub fn render_event_card(event: &Event) -> String {
    format!(
        r#"<a class="event-card" href="/events/{id}" data-event-id="{id}">
    <p class="event-venue">{venue}, {city}</p>
    <h3 class="event-name">{name}</h3>
    <p class="event-date">{date}</p>
</a>"#,
        id = event.id,
        venue = escape_html(&event.venue_name),
        city = escape_html(&event.city),
        name = escape_html(&event.name),
        date = event.start_time.format(CARD_DATE_FORMAT),
    )
}

fn render_cards(events: &[&Event]) -> String {
    events.iter().map(|e| render_event_card(e)).collect::<Vec<_>>().join("\n")
}

/// Render the ongoing and all-events containers for the dashboard.
pub fn render_event_list(events: &[Event], location: &str, now: DateTime<Local>) -> String {
    let listing = partition_events(events, location, now);

    let mut html = String::new();

    if let Some(ongoing) = &listing.ongoing {
        let body = if ongoing.is_empty() {
            format!(r#"<p class="placeholder">{}</p>"#, NO_ONGOING_EVENTS)
        } else {
            render_cards(ongoing)
        };
        html.push_str(&format!(
            "<section id=\"ongoing-events-container\">\n<h2>Happening now</h2>\n{}\n</section>\n",
            body
        ));
    }

    let body = if listing.is_empty() {
        format!(r#"<p class="placeholder">{}</p>"#, NO_EVENTS_FOUND)
    } else {
        render_cards(&listing.other)
    };
    html.push_str(&format!(
        "<section id=\"events-container\">\n<h2>Events</h2>\n{}\n</section>\n",
        body
    ));

    html
}
