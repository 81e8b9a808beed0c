use thiserror::Error;

/// Errors surfaced by the crate.
/// Rendering never aborts on these; callers decide whether to log and fall back.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifeError {
    #[error("invalid color {input:?}: {reason}")]
    InvalidColor { input: String, reason: &'static str },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown pattern {0:?}")]
    UnknownPattern(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
