//! View state holder.
//!
//! Holds the last fetched dataset and the signed-in user. Nothing here survives a restart.

use crate::models::{Dataset, User};

/// The dataset snapshot and the identity it is being viewed as.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    dataset: Dataset,
    current_user: Option<User>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    /// Swap in a freshly fetched dataset. The current user is left as it was,
    /// even if the new dataset no longer contains it.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    pub fn set_current_user(&mut self, user: User) {
        self.current_user = Some(user);
    }

    /// Drop both the dataset and the user.
    pub fn clear(&mut self) {
        self.dataset = Dataset::default();
        self.current_user = None;
    }

    /// Return to the freshly started state.
    pub fn reset(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first_name: &str) -> User {
        User {
            id,
            first_name: first_name.to_string(),
            last_name: String::new(),
        }
    }

    #[test]
    fn test_starts_logged_out_and_empty() {
        let state = ViewState::new();
        assert!(!state.is_logged_in());
        assert_eq!(state.dataset(), &Dataset::default());
    }

    #[test]
    fn test_replace_dataset_keeps_user() {
        let mut state = ViewState::new();
        state.set_current_user(user(4, "Asha"));
        state.replace_dataset(Dataset {
            users: vec![user(9, "Vikram")],
            ..Dataset::default()
        });

        assert_eq!(state.current_user().map(|u| u.id), Some(4));
        assert_eq!(state.dataset().users.len(), 1);
    }

    #[test]
    fn test_clear_resets_both() {
        let mut state = ViewState::new();
        state.replace_dataset(Dataset {
            users: vec![user(1, "Asha")],
            ..Dataset::default()
        });
        state.set_current_user(user(1, "Asha"));

        state.reset();

        assert!(state.current_user().is_none());
        assert!(state.dataset().users.is_empty());
    }
}
