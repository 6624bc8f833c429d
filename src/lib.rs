//! Hero pick recommendation and win prediction for 5v5 drafts.
//!
//! A [`HeroCatalog`] defines the id space, the [`FeatureEncoder`] turns two
//! rosters into the compacted hero-presence vector the model was trained on,
//! and the [`Engine`] ranks candidate picks through any [`Scorer`].

pub mod analysis;
pub mod config;
pub mod data;
pub mod error;
pub mod scoring;

pub use analysis::encoder::{FeatureEncoder, FeatureVector};
pub use analysis::recommender::{Engine, Recommendation};
pub use analysis::roster::TeamRoster;
pub use data::catalog::HeroCatalog;
pub use data::models::HeroId;
pub use error::AppError;
pub use scoring::{DenseNetwork, Scorer};
