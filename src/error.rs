use thiserror::Error;

#[derive(Debug, Error)]
pub enum FindError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("No match set to navigate; run a search first")]
    EmptyMatchSet,

    #[error("Match index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to load project: {0}")]
    ProjectLoad(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
