//! Dataset model matching the `/api/data` bootstrap payload.

use serde::{Deserialize, Serialize};

use super::{Event, Organiser, SecurityAssignment, StaffAssignment, Ticket, User};

/// Everything the backend hands out in one bootstrap fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub organisers: Vec<Organiser>,
    #[serde(default)]
    pub staff: Vec<StaffAssignment>,
    #[serde(default)]
    pub security: Vec<SecurityAssignment>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

impl Dataset {
    pub fn find_event(&self, event_id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == event_id)
    }

    pub fn find_organiser(&self, org_id: i64) -> Option<&Organiser> {
        self.organisers.iter().find(|o| o.id == org_id)
    }

    /// First user whose first name matches, ignoring case.
    pub fn find_user_by_first_name(&self, first_name: &str) -> Option<&User> {
        self.users.iter().find(|u| u.has_first_name(first_name))
    }

    pub fn staff_for_event(&self, event_id: i64) -> impl Iterator<Item = &StaffAssignment> {
        self.staff.iter().filter(move |s| s.event_id == event_id)
    }

    pub fn tickets_for_event(&self, event_id: i64) -> impl Iterator<Item = &Ticket> {
        self.tickets.iter().filter(move |t| t.event_id == event_id)
    }

    /// Sum of ticket prices for an event.
    pub fn revenue_for_event(&self, event_id: i64) -> f64 {
        self.tickets_for_event(event_id).map(|t| t.price).sum()
    }
}
