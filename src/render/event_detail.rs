//! Event detail page: revenue, organiser, staff and security.

use super::{escape_html, format_currency, DETAIL_TIME_FORMAT};
use crate::errors::ClientError;
use crate::models::{Dataset, Event, SecurityAssignment, StaffAssignment};

pub const UNKNOWN_ORGANISER: &str = "Unknown organiser";
pub const NO_STAFF: &str = "No staff assigned yet.";
pub const NO_SECURITY: &str = "No security assigned yet.";

/// Everything the detail page shows about one event.
#[derive(Debug)]
pub struct EventDetail<'a> {
    pub event: &'a Event,
    pub organiser_name: &'a str,
    pub staff: Vec<&'a StaffAssignment>,
    /// Security is not tied to events, so the full roster is shown
    pub security: &'a [SecurityAssignment],
    pub total_revenue: f64,
}

/// Gather an event and the records around it.
///
/// A missing event is a resolution error. A missing organiser degrades to a
/// placeholder name.
pub fn resolve_event_detail(dataset: &Dataset, event_id: i64) -> Result<EventDetail<'_>, ClientError> {
    let event = dataset
        .find_event(event_id)
        .ok_or_else(|| ClientError::Resolution(format!("Event {} not found.", event_id)))?;

    let organiser_name = match dataset.find_organiser(event.organiser_id) {
        Some(organiser) => organiser.name.as_str(),
        None => {
            tracing::warn!(
                event_id,
                org_id = event.organiser_id,
                "Event references an unknown organiser"
            );
            UNKNOWN_ORGANISER
        }
    };

    Ok(EventDetail {
        event,
        organiser_name,
        staff: dataset.staff_for_event(event_id).collect(),
        security: &dataset.security,
        total_revenue: dataset.revenue_for_event(event_id),
    })
}

fn render_list<T>(items: &[T], empty: &str, item: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return format!("<li>{}</li>", empty);
    }
    items
        .iter()
        .map(|i| format!("<li>{}</li>", item(i)))
        .collect::<Vec<_>>()
        .join("")
}

pub fn render_event_detail(detail: &EventDetail<'_>) -> String {
    let event = detail.event;

    let staff = render_list(&detail.staff, NO_STAFF, |s| escape_html(&s.name));
    let security = render_list(detail.security, NO_SECURITY, |s| {
        format!("{} ({})", escape_html(&s.name), escape_html(&s.zone))
    });

    format!(
        r#"<div id="event-detail-container">
    <div class="detail-main">
        <h2 class="detail-title">{name}</h2>
        <p class="detail-time">{start}</p>
        <p class="detail-venue">{venue}, {city}</p>
        <a id="book-ticket-button" class="button" href="/events/{id}/book" data-eventid="{id}">Book Ticket</a>
    </div>
    <div class="detail-side">
        <div class="card"><h3>Total Revenue</h3><p class="revenue">{revenue}</p></div>
        <div class="card"><h3>Organiser</h3><p class="organiser">{organiser}</p></div>
    </div>
    <div class="detail-lists">
        <div class="card"><h3>Staff on Duty</h3><ul class="staff">{staff}</ul></div>
        <div class="card"><h3>Security Details</h3><ul class="security">{security}</ul></div>
    </div>
</div>"#,
        id = event.id,
        name = escape_html(&event.name),
        start = event.start_time.format(DETAIL_TIME_FORMAT),
        venue = escape_html(&event.venue_name),
        city = escape_html(&event.city),
        revenue = format_currency(detail.total_revenue),
        organiser = escape_html(detail.organiser_name),
        staff = staff,
        security = security,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Organiser, Ticket};
    use chrono::{Duration, Local};

    fn dataset() -> Dataset {
        let now = Local::now();
        Dataset {
            events: vec![
                Event {
                    id: 1,
                    name: "Jazz Evening".to_string(),
                    organiser_id: 10,
                    venue_id: Some(1),
                    venue_name: "Blue Frog".to_string(),
                    city: "Pune".to_string(),
                    start_time: now,
                    end_time: now + Duration::hours(3),
                },
                Event {
                    id: 2,
                    name: "Orphan Gig".to_string(),
                    organiser_id: 99,
                    venue_id: None,
                    venue_name: "Garage".to_string(),
                    city: "Mumbai".to_string(),
                    start_time: now,
                    end_time: now,
                },
            ],
            organisers: vec![Organiser {
                id: 10,
                name: "Live Nation".to_string(),
            }],
            staff: vec![
                StaffAssignment {
                    id: 1,
                    name: "Ravi".to_string(),
                    event_id: 1,
                },
                StaffAssignment {
                    id: 2,
                    name: "Neha".to_string(),
                    event_id: 2,
                },
            ],
            security: vec![SecurityAssignment {
                name: "Karan".to_string(),
                zone: "Gate A".to_string(),
            }],
            tickets: vec![
                Ticket {
                    id: 1,
                    event_id: 1,
                    user_id: 1,
                    price: 500.0,
                },
                Ticket {
                    id: 2,
                    event_id: 1,
                    user_id: 2,
                    price: 1500.5,
                },
            ],
            ..Dataset::default()
        }
    }

    #[test]
    fn test_resolves_event_organiser_staff_and_revenue() {
        let dataset = dataset();
        let detail = resolve_event_detail(&dataset, 1).unwrap();

        assert_eq!(detail.event.id, 1);
        assert_eq!(detail.organiser_name, "Live Nation");
        assert_eq!(detail.staff.len(), 1);
        assert_eq!(detail.staff[0].name, "Ravi");
        assert_eq!(detail.security.len(), 1);
        assert_eq!(detail.total_revenue, 2000.5);

        let html = render_event_detail(&detail);
        assert!(html.contains("₹2000.50"));
        assert!(html.contains("Karan (Gate A)"));
        assert!(html.contains(r#"href="/events/1/book""#));
    }

    #[test]
    fn test_event_without_tickets_has_zero_revenue() {
        let dataset = dataset();
        let detail = resolve_event_detail(&dataset, 2).unwrap();

        assert_eq!(detail.total_revenue, 0.0);
        assert!(render_event_detail(&detail).contains("₹0.00"));
    }

    #[test]
    fn test_missing_organiser_renders_placeholder() {
        let dataset = dataset();
        let detail = resolve_event_detail(&dataset, 2).unwrap();

        assert_eq!(detail.organiser_name, UNKNOWN_ORGANISER);
        assert!(render_event_detail(&detail).contains(UNKNOWN_ORGANISER));
    }

    #[test]
    fn test_missing_event_is_resolution_error() {
        let dataset = dataset();
        let err = resolve_event_detail(&dataset, 42).unwrap_err();
        assert_eq!(err, ClientError::Resolution("Event 42 not found.".to_string()));
    }

    #[test]
    fn test_detail_shows_start_time() {
        let mut dataset = dataset();
        dataset.events[0].start_time =
            crate::models::parse_timestamp("2025-10-17T18:30:05").unwrap();
        let detail = resolve_event_detail(&dataset, 1).unwrap();

        assert!(render_event_detail(&detail).contains("17/10/2025, 18:30:05"));
    }

    #[test]
    fn test_empty_staff_placeholder() {
        let mut dataset = dataset();
        dataset.staff.clear();
        let detail = resolve_event_detail(&dataset, 1).unwrap();
        assert!(render_event_detail(&detail).contains(NO_STAFF));
    }
}
