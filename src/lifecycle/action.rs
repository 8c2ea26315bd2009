use crate::lifecycle::Status;

/// What `validate()` does for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing has been compared yet.
    NotReady,
    ReportSuccess,
    ReportError,
    ReportFatal,
    /// Already validated; a further call is a usage error.
    DuplicateGuard,
}

impl Action {
    pub fn for_state(status: Status, fail_fast: bool) -> Self {
        match status {
            Status::PendingTarget | Status::PendingComparison => Action::NotReady,
            Status::PassPendingValidation => Action::ReportSuccess,
            Status::FailPendingValidation if fail_fast => Action::ReportFatal,
            Status::FailPendingValidation => Action::ReportError,
            Status::Passed | Status::Failed => Action::DuplicateGuard,
        }
    }
}
