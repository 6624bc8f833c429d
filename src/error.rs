use thiserror::Error;

use crate::data::models::HeroId;

/// Which side of the draft a roster belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Mine,
    Theirs,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Mine => write!(f, "your team"),
            Side::Theirs => write!(f, "their team"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Hero data error: {0}")]
    DataLoadError(String),

    #[error("Model error: {0}")]
    ModelLoadError(String),

    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    #[error("Unknown hero: {0}")]
    UnknownHero(HeroId),

    #[error("{0} is full, remove a hero before asking for a recommendation")]
    TeamFull(Side),

    #[error("Feature width mismatch: model expects {expected}, encoder produced {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
