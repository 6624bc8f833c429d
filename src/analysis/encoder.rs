//! Hero-presence encoding of a draft, laid out the way the model was trained.
//!
//! The raw layout has `2 * max_id + 1` slots: hero `id` of my team marks slot
//! `id`, hero `id` of their team marks slot `id + max_id`. Slots belonging to
//! gap ids (`g` and, for `g > 0`, `g + max_id`) are then dropped, keeping the
//! remaining slots in ascending order.

use super::roster::TeamRoster;
use crate::data::catalog::HeroCatalog;
use crate::data::models::HeroId;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Indices of the non-zero slots.
    pub fn active_positions(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(values: Vec<f32>) -> Self {
        FeatureVector(values)
    }
}

#[derive(Debug, Clone)]
pub struct FeatureEncoder {
    max_id: HeroId,
    gaps: Vec<HeroId>,
    // raw slot -> compacted slot, None for removed slots
    compact: Vec<Option<usize>>,
    width: usize,
}

impl FeatureEncoder {
    pub fn new(catalog: &HeroCatalog) -> Self {
        let max_id = catalog.max_id();
        let offset = max_id as usize;
        let raw_len = 2 * offset + 1;

        let mut keep = vec![true; raw_len];
        for &gap in catalog.missing_ids() {
            keep[gap as usize] = false;
            if gap > 0 {
                keep[gap as usize + offset] = false;
            }
        }

        let mut width = 0;
        let compact = keep
            .into_iter()
            .map(|kept| {
                kept.then(|| {
                    width += 1;
                    width - 1
                })
            })
            .collect();

        FeatureEncoder {
            max_id,
            gaps: catalog.missing_ids().to_vec(),
            compact,
            width,
        }
    }

    /// Length of every vector this encoder produces.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check that both rosters only hold catalog heroes and share none.
    pub fn validate(&self, my_team: &TeamRoster, their_team: &TeamRoster) -> Result<(), AppError> {
        for id in my_team.iter().chain(their_team.iter()) {
            if id > self.max_id {
                return Err(AppError::InvalidRoster(format!(
                    "hero id {} is outside 0..={}",
                    id, self.max_id
                )));
            }
            if self.gaps.binary_search(&id).is_ok() {
                return Err(AppError::UnknownHero(id));
            }
        }

        if let Some(id) = my_team.overlap(their_team).next() {
            return Err(AppError::InvalidRoster(format!(
                "hero {} cannot be on both teams",
                id
            )));
        }

        Ok(())
    }

    pub fn encode(
        &self,
        my_team: &TeamRoster,
        their_team: &TeamRoster,
    ) -> Result<FeatureVector, AppError> {
        self.validate(my_team, their_team)?;

        let offset = self.max_id as usize;
        let mut values = vec![0.0f32; self.width];

        let raw_slots = my_team
            .iter()
            .map(|id| id as usize)
            .chain(their_team.iter().map(|id| id as usize + offset));

        for raw in raw_slots {
            // validated ids never land on a removed slot
            if let Some(slot) = self.compact[raw] {
                values[slot] = 1.0;
            }
        }

        Ok(FeatureVector(values))
    }
}
