//! Booking modal state and its entrance/exit transition.

use std::time::Duration;

use crate::models::TicketOption;

/// Delay before the entrance transition starts.
pub const MODAL_ENTER_DELAY: Duration = Duration::from_millis(10);
/// Length of the exit transition; the modal is hidden once it ends.
pub const MODAL_EXIT_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalPhase {
    #[default]
    Hidden,
    Entering,
    Open,
    Closing,
}

/// The booking overlay.
///
/// The ticket-type selection outlives the modal being closed, the way a form
/// control keeps its value while hidden.
#[derive(Debug, Clone, Default)]
pub struct BookingModal {
    phase: ModalPhase,
    event_id: Option<i64>,
    ticket_type: Option<String>,
    displayed_price: f64,
    generation: u64,
}

impl BookingModal {
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Hidden
    }

    pub fn event_id(&self) -> Option<i64> {
        self.event_id
    }

    pub fn displayed_price(&self) -> f64 {
        self.displayed_price
    }

    /// Selected ticket type, defaulting to the first option.
    pub fn selected<'a>(&self, options: &'a [TicketOption]) -> Option<&'a TicketOption> {
        self.ticket_type
            .as_deref()
            .and_then(|name| options.iter().find(|o| o.name == name))
            .or_else(|| options.first())
    }

    /// Class driving the scale transition.
    pub fn scale_class(&self) -> &'static str {
        match self.phase {
            ModalPhase::Open => "scale-100",
            _ => "scale-95",
        }
    }

    /// Reveal the modal for `event_id`. Returns the ticket for the entrance timer.
    pub fn open(&mut self, event_id: i64, options: &[TicketOption]) -> u64 {
        self.event_id = Some(event_id);
        self.update_price(options);
        self.phase = ModalPhase::Entering;
        self.generation += 1;
        self.generation
    }

    pub fn finish_enter(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != ModalPhase::Entering {
            return false;
        }
        self.phase = ModalPhase::Open;
        true
    }

    /// Start the exit transition. Returns the ticket for the hide timer.
    pub fn close(&mut self) -> u64 {
        if self.phase != ModalPhase::Hidden {
            self.phase = ModalPhase::Closing;
        }
        self.generation += 1;
        self.generation
    }

    pub fn finish_close(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != ModalPhase::Closing {
            return false;
        }
        self.phase = ModalPhase::Hidden;
        true
    }

    /// Hide immediately, without a transition.
    pub fn dismiss(&mut self) {
        self.phase = ModalPhase::Hidden;
        self.event_id = None;
        self.generation += 1;
    }

    /// Select a ticket type and recompute the displayed price.
    ///
    /// Returns false when `ticket_type` is not one of `options`.
    pub fn select(&mut self, ticket_type: &str, options: &[TicketOption]) -> bool {
        if !options.iter().any(|o| o.name == ticket_type) {
            return false;
        }
        self.ticket_type = Some(ticket_type.to_string());
        self.update_price(options);
        true
    }

    fn update_price(&mut self, options: &[TicketOption]) {
        self.displayed_price = self.selected(options).map(|o| o.price).unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<TicketOption> {
        vec![
            TicketOption {
                name: "General".to_string(),
                price: 500.0,
            },
            TicketOption {
                name: "VIP".to_string(),
                price: 1500.0,
            },
        ]
    }

    #[test]
    fn test_open_uses_current_selection_price() {
        let options = options();
        let mut modal = BookingModal::default();

        modal.open(3, &options);
        assert_eq!(modal.phase(), ModalPhase::Entering);
        assert_eq!(modal.event_id(), Some(3));
        assert_eq!(modal.displayed_price(), 500.0);

        modal.select("VIP", &options);
        modal.dismiss();
        modal.open(4, &options);
        assert_eq!(modal.displayed_price(), 1500.0);
    }

    #[test]
    fn test_select_unknown_type_is_refused() {
        let options = options();
        let mut modal = BookingModal::default();
        modal.open(1, &options);

        assert!(!modal.select("Platinum", &options));
        assert_eq!(modal.displayed_price(), 500.0);
        assert_eq!(modal.selected(&options).map(|o| o.name.as_str()), Some("General"));
    }

    #[test]
    fn test_transition_sequence() {
        let options = options();
        let mut modal = BookingModal::default();

        let enter = modal.open(1, &options);
        assert_eq!(modal.scale_class(), "scale-95");
        assert!(modal.finish_enter(enter));
        assert_eq!(modal.scale_class(), "scale-100");

        let exit = modal.close();
        assert_eq!(modal.phase(), ModalPhase::Closing);
        assert!(modal.is_visible());
        assert!(modal.finish_close(exit));
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_reopen_during_exit_survives_old_timer() {
        let options = options();
        let mut modal = BookingModal::default();

        let enter = modal.open(1, &options);
        modal.finish_enter(enter);
        let exit = modal.close();
        let reenter = modal.open(2, &options);

        assert!(!modal.finish_close(exit));
        assert!(modal.is_visible());
        assert!(modal.finish_enter(reenter));
        assert_eq!(modal.event_id(), Some(2));
    }
}
