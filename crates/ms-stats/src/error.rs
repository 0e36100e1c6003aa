use thiserror::Error;

/// Failure taxonomy for distribution validation.
///
/// `Type` means the candidate has the wrong shape altogether (not a
/// mapping); `Value` means the shape is right but the content is not a
/// probability mass function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("invalid input type: expected a mapping of outcome to probability, got {found}")]
    Type { found: &'static str },

    #[error("invalid distribution: {0}")]
    Value(String),
}

impl StatError {
    pub fn value(msg: impl Into<String>) -> Self {
        StatError::Value(msg.into())
    }
}

pub type StatResult<T> = Result<T, StatError>;
