use contracts::shared::master_data::SubmitState;

/// What the form dialog is editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogMode {
    Create,
    Edit { id: String },
}

/// Reaction of an open dialog to the submit state of its mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settle {
    /// Nothing submitted yet, or still in flight
    Wait,
    /// Stored: close the dialog
    Close,
    /// Rejected: keep the draft open and show the error
    Retry(String),
}

/// Only a dialog that submitted reacts; a stale `Succeeded` from an
/// earlier mutation must not close a freshly opened dialog.
pub fn settle(awaiting: bool, state: &SubmitState) -> Settle {
    if !awaiting {
        return Settle::Wait;
    }
    match state {
        SubmitState::Succeeded => Settle::Close,
        SubmitState::Failed(e) => Settle::Retry(e.clone()),
        SubmitState::Idle | SubmitState::Submitting => Settle::Wait,
    }
}

/// A second click while the first save is still pending is ignored
pub fn accepts_submit(awaiting: bool, state: &SubmitState) -> bool {
    !awaiting && !state.is_busy()
}
