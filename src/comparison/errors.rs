use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("unable to compare value: {reason}")]
    UnsupportedValue { reason: String },
}

impl NormalizeError {
    pub fn unsupported(reason: impl Into<String>) -> Self {
        NormalizeError::UnsupportedValue {
            reason: reason.into(),
        }
    }
}
