use thiserror::Error;

/// Failures produced while turning a raw profile into a resampled loop. None of these are
/// transient, a profile which fails once will always fail with the same input.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProfileError {
    /// The input text could not be read as a profile
    #[error("parse error: {0}")]
    Parse(String),

    /// No leading/trailing edge could be found, or an arc was too short to interpolate
    #[error("split error: {0}")]
    Split(String),

    /// An arc can't be interpolated at or around the vertex at `index`
    #[error("degenerate arc at vertex {index}: {reason}")]
    DegenerateArc { index: usize, reason: String },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl ProfileError {
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse(reason.into())
    }

    #[must_use]
    pub fn split(reason: impl Into<String>) -> Self {
        Self::Split(reason.into())
    }

    #[must_use]
    pub fn degenerate_arc(index: usize, reason: impl Into<String>) -> Self {
        Self::DegenerateArc {
            index,
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self::InvalidParams(reason.into())
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
