use super::encoder::FeatureEncoder;
use super::roster::TeamRoster;
use crate::data::catalog::HeroCatalog;
use crate::data::models::HeroId;
use crate::error::{AppError, Side};
use crate::scoring::Scorer;
use serde::Serialize;
use std::cmp::Ordering;

/// Upper bound on the number of picks returned.
pub const MAX_TOP_K: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation {
    pub probability: f64,
    pub hero: HeroId,
}

impl Recommendation {
    /// Descending probability, then descending hero id.
    pub fn rank_order(a: &Recommendation, b: &Recommendation) -> Ordering {
        b.probability
            .total_cmp(&a.probability)
            .then_with(|| b.hero.cmp(&a.hero))
    }
}

/// Ranks heroes to add to an incomplete team with a pluggable scorer.
pub struct Engine<S> {
    catalog: HeroCatalog,
    encoder: FeatureEncoder,
    scorer: S,
    top_k: usize,
}

impl<S: Scorer> Engine<S> {
    pub fn new(catalog: HeroCatalog, scorer: S) -> Result<Self, AppError> {
        let encoder = FeatureEncoder::new(&catalog);

        if scorer.input_width() != encoder.width() {
            return Err(AppError::ShapeMismatch {
                expected: scorer.input_width(),
                actual: encoder.width(),
            });
        }

        Ok(Engine {
            catalog,
            encoder,
            scorer,
            top_k: MAX_TOP_K,
        })
    }

    /// Fewer picks than the default; values above `MAX_TOP_K` are clamped.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k.min(MAX_TOP_K);
        self
    }

    pub fn catalog(&self) -> &HeroCatalog {
        &self.catalog
    }

    /// Heroes that can still be picked, ascending.
    pub fn candidates(&self, my_team: &TeamRoster, their_team: &TeamRoster) -> Vec<HeroId> {
        // valid_ids already excludes gaps; the gap filter is part of the contract
        self.catalog
            .valid_ids()
            .filter(|&id| !my_team.contains(id))
            .filter(|&id| !their_team.contains(id))
            .filter(|&id| !self.catalog.is_gap(id))
            .collect()
    }

    pub fn recommend(
        &self,
        my_team: &TeamRoster,
        their_team: &TeamRoster,
    ) -> Result<Vec<Recommendation>, AppError> {
        if my_team.is_full() {
            return Err(AppError::TeamFull(Side::Mine));
        }
        self.encoder.validate(my_team, their_team)?;

        let mut recommendations = self
            .candidates(my_team, their_team)
            .into_iter()
            .map(|hero| {
                let features = self.encoder.encode(&my_team.with(hero), their_team)?;
                let probability = self.scorer.score(&features)?;
                Ok(Recommendation { probability, hero })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        recommendations.sort_by(Recommendation::rank_order);
        recommendations.truncate(self.top_k);

        Ok(recommendations)
    }

    /// Probability that `team_a` beats `team_b`.
    pub fn predict(&self, team_a: &TeamRoster, team_b: &TeamRoster) -> Result<f64, AppError> {
        let features = self.encoder.encode(team_a, team_b)?;
        self.scorer.score(&features)
    }
}
