use thiserror::Error;

/// The pattern did not compile. `message` is the compiler's diagnostic,
/// unchanged, so it can be shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PatternError {
    pub message: String,
}

impl From<regex::Error> for PatternError {
    fn from(err: regex::Error) -> Self {
        PatternError {
            message: err.to_string(),
        }
    }
}
