//! The submit state machine behind the profile edit form.
//!
//! A [`ProfileEditor`] owns the transient edit state for one open form:
//! the last committed user snapshot, the raw input as typed, and whether a
//! submission is in flight. Submission is fire-and-wait with no retry; the
//! only mutual exclusion is the disable-while-pending rule, scoped to this
//! editor instance.

use crate::draft::{ProfileDraft, ProfileInput, ValidationErrors, validate};
use crate::user::User;

/// Whether a submission is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    /// No submission in flight; the form accepts a submit.
    #[default]
    Idle,
    /// An update request has been issued and not yet resolved.
    Pending,
}

/// Why a submit attempt did not produce an update request.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    /// A previous submission has not resolved yet.
    #[error("an update is already in flight")]
    InFlight,
    /// One or more fields failed validation; the entered values are kept.
    #[error("validation failed: {0}")]
    Invalid(ValidationErrors),
}

/// Edit state for one open profile form.
pub struct ProfileEditor {
    snapshot: User,
    input: ProfileInput,
    state: SubmitState,
}

impl ProfileEditor {
    /// Open the editor on a user, pre-populating the input from the
    /// current snapshot.
    #[must_use]
    pub fn open(user: User) -> Self {
        let input = ProfileInput::from_user(&user);
        Self {
            snapshot: user,
            input,
            state: SubmitState::Idle,
        }
    }

    /// The last committed user snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &User {
        &self.snapshot
    }

    /// The raw input as currently typed.
    #[must_use]
    pub const fn input(&self) -> &ProfileInput {
        &self.input
    }

    /// Mutable access to the raw input, for field edits.
    pub const fn input_mut(&mut self) -> &mut ProfileInput {
        &mut self.input
    }

    /// True while an update request is unresolved.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    /// Validate the input and move to `Pending`, yielding the draft to
    /// send as the update request.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::InFlight`] while a previous submission is pending;
    ///   no second request may be issued.
    /// - [`SubmitError::Invalid`] when validation fails. The state stays
    ///   `Idle` and the entered values are untouched, so the user can fix
    ///   the offending fields and resubmit.
    pub fn begin_submit(&mut self) -> Result<ProfileDraft, SubmitError> {
        if self.state == SubmitState::Pending {
            return Err(SubmitError::InFlight);
        }

        let draft = validate(&self.input).map_err(SubmitError::Invalid)?;
        self.state = SubmitState::Pending;
        Ok(draft)
    }

    /// Resolve the in-flight submission with the refreshed user returned
    /// by the update. The snapshot is replaced and the input reset from
    /// it, so the next render shows the committed values.
    pub fn submit_succeeded(&mut self, user: User) {
        self.input = ProfileInput::from_user(&user);
        self.snapshot = user;
        self.state = SubmitState::Idle;
    }

    /// Resolve the in-flight submission as failed. The entered values are
    /// retained; the user may resubmit. No automatic retry.
    pub fn submit_failed(&mut self) {
        self.state = SubmitState::Idle;
    }
}
