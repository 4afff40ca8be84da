//! Confirmation gate in front of destructive or status-changing actions.

use crate::{id::RecordId, status::ReportAction};

/// `Closed`, or `Open` with the single pending action. Opening while open
/// replaces the pending action; dialogs never stack.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmState<A> {
    /// Nothing pending; the dialog renders nothing.
    Closed,
    /// Waiting for the user to confirm or cancel `A`.
    Open(A),
}

impl<A> Default for ConfirmState<A> {
    fn default() -> Self {
        ConfirmState::Closed
    }
}

impl<A> ConfirmState<A> {
    /// Opens the dialog for `action`.
    pub fn open(action: A) -> Self {
        ConfirmState::Open(action)
    }

    /// True while the dialog is shown.
    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmState::Open(_))
    }

    /// Pending action, if any.
    pub fn pending(&self) -> Option<&A> {
        match self {
            ConfirmState::Open(action) => Some(action),
            ConfirmState::Closed => None,
        }
    }

    /// Closes the dialog and hands back the action to run, exactly once.
    pub fn confirm(&mut self) -> Option<A> {
        match std::mem::replace(self, ConfirmState::Closed) {
            ConfirmState::Open(action) => Some(action),
            ConfirmState::Closed => None,
        }
    }

    /// Closes the dialog and drops the pending action.
    pub fn cancel(&mut self) {
        *self = ConfirmState::Closed;
    }
}

/// Text shown by the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmCopy {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

impl ConfirmCopy {
    /// Copy for resolving or dismissing one report. `subject` reads like
    /// `post p1` or `group g7`.
    pub fn for_report(action: ReportAction, reporter: &RecordId, subject: &str) -> Self {
        ConfirmCopy {
            title: action.confirm_title().to_string(),
            message: format!(
                "Are you sure you want to {} the report by {} for {}?",
                action.path_segment(),
                reporter,
                subject
            ),
            confirm_label: action.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfirmCopy, ConfirmState};
    use crate::status::ReportAction;

    #[test]
    fn confirm_yields_action_once() {
        let mut state = ConfirmState::open("delete m1");
        assert!(state.is_open());
        assert_eq!(state.confirm(), Some("delete m1"));
        assert!(!state.is_open());
        assert_eq!(state.confirm(), None);
    }

    #[test]
    fn cancel_discards_action() {
        let mut state = ConfirmState::open(7);
        state.cancel();
        assert_eq!(state, ConfirmState::Closed);
        assert_eq!(state.confirm(), None);
    }

    #[test]
    fn reopening_replaces_pending_action() {
        let first = ConfirmState::open(1);
        assert_eq!(first.pending(), Some(&1));
        let mut state = ConfirmState::open(2);
        assert_eq!(state.pending(), Some(&2));
        assert_eq!(state.confirm(), Some(2));
    }

    #[test]
    fn report_copy_names_reporter_and_subject() {
        let copy = ConfirmCopy::for_report(ReportAction::Dismiss, &"u1".into(), "post p1");
        assert_eq!(copy.title, "Dismiss report?");
        assert_eq!(copy.message, "Are you sure you want to dismiss the report by u1 for post p1?");
        assert_eq!(copy.confirm_label, "Dismiss");
    }
}
