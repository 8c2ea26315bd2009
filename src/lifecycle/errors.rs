use thiserror::Error;

/// Ways a test can be driven out of order. The display text is the directive
/// shown to the test author.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageError {
    #[error("comparison before target: call target() first")]
    ComparisonBeforeTarget,
    #[error("repeated comparison: call target() again before comparing again")]
    RepeatedComparison,
    #[error("comparison after validation: start a new cycle with target() or create a new test")]
    ComparisonAfterValidation,
    #[error("validation before comparison: call equals() or does_not_equal() first")]
    ValidationBeforeComparison,
    #[error("duplicate validation: validate() may only be called once per comparison")]
    DuplicateValidation,
    #[error("call after sequence error: the test already failed, start a new cycle with target()")]
    AfterSequenceError,
}
