use marketplace_result::Error;

/// Where a step form is in its submission cycle
#[derive(Debug, Clone, Default)]
pub enum FormState {
    /// Accepting input, carrying the error of the last attempt if it failed
    #[default]
    Idle,
    /// Waiting on the backend
    Submitting,
    /// Last attempt failed, form is editable again
    Failed(Error),
}

impl FormState {
    /// Move into `Submitting`
    ///
    /// Returns false if a submission is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }

        *self = FormState::Submitting;
        true
    }

    /// Submission went through
    pub fn succeed(&mut self) {
        *self = FormState::Idle;
    }

    /// Submission failed, keep the error around to display it
    pub fn fail(&mut self, error: Error) {
        *self = FormState::Failed(error);
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }

    /// Error to show next to the form
    pub fn error(&self) -> Option<&Error> {
        match self {
            FormState::Failed(error) => Some(error),
            _ => None,
        }
    }
}
