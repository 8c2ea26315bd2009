use crate::comparison::Value;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// No target has been set.
    PendingTarget,
    /// Target is set, waiting for `equals` or `does_not_equal`.
    PendingComparison,
    FailPendingValidation,
    PassPendingValidation,
    Failed,
    Passed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::PendingTarget => "pending_target",
            Status::PendingComparison => "pending_comparison",
            Status::FailPendingValidation => "fail_pending_validation",
            Status::PassPendingValidation => "pass_pending_validation",
            Status::Failed => "failed",
            Status::Passed => "passed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Failed | Status::Passed)
    }

    pub fn is_pending_validation(&self) -> bool {
        matches!(
            self,
            Status::FailPendingValidation | Status::PassPendingValidation
        )
    }

    /// True once an outcome message exists.
    pub fn is_compared(&self) -> bool {
        self.is_pending_validation() || self.is_terminal()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Status> for Value {
    fn from(status: Status) -> Self {
        Value::Text(status.as_str().to_string())
    }
}

pub const SET_TARGET_GUIDANCE: &str =
    "No target set: call target() before equals() or does_not_equal()";
pub const COMPARE_GUIDANCE: &str =
    "No comparison made: call equals() or does_not_equal() after target()";

/// Snapshot of a test's state and outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub status: Status,
    pub output: String,
}

impl TestResult {
    pub(crate) fn pending() -> Self {
        Self {
            status: Status::PendingTarget,
            output: String::new(),
        }
    }

    pub fn passed(&self) -> bool {
        matches!(
            self.status,
            Status::Passed | Status::PassPendingValidation
        )
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Status::PendingTarget => f.write_str(SET_TARGET_GUIDANCE),
            Status::PendingComparison => f.write_str(COMPARE_GUIDANCE),
            _ => f.write_str(&self.output),
        }
    }
}
