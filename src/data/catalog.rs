use super::models::{HeroId, HeroRecord};
use crate::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Read-only hero reference data, loaded once at startup.
///
/// Identifiers are sparse: every integer in `[0, max_id)` that has no record
/// is a gap id and is kept in `missing` (ascending).
#[derive(Debug, Clone)]
pub struct HeroCatalog {
    heroes: BTreeMap<HeroId, HeroRecord>,
    missing: Vec<HeroId>,
    max_id: HeroId,
}

impl HeroCatalog {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::DataLoadError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let records: Vec<HeroRecord> = serde_json::from_str(content).map_err(|e| {
            AppError::DataLoadError(format!("Failed to parse hero list: {}", e))
        })?;

        Self::from_records(records)
    }

    pub fn from_records(records: Vec<HeroRecord>) -> Result<Self, AppError> {
        let mut heroes = BTreeMap::new();
        for record in records {
            let id = record.id;
            if heroes.insert(id, record).is_some() {
                return Err(AppError::DataLoadError(format!(
                    "Duplicate hero id {} in hero list",
                    id
                )));
            }
        }

        let max_id = match heroes.keys().next_back() {
            Some(&id) => id,
            None => {
                return Err(AppError::DataLoadError(
                    "Hero list is empty".to_string(),
                ))
            }
        };

        let missing = (0..max_id).filter(|id| !heroes.contains_key(id)).collect();

        Ok(HeroCatalog {
            heroes,
            missing,
            max_id,
        })
    }

    /// All known identifiers, ascending.
    pub fn valid_ids(&self) -> impl Iterator<Item = HeroId> + '_ {
        self.heroes.keys().copied()
    }

    pub fn missing_ids(&self) -> &[HeroId] {
        &self.missing
    }

    pub fn max_id(&self) -> HeroId {
        self.max_id
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn contains(&self, id: HeroId) -> bool {
        self.heroes.contains_key(&id)
    }

    pub fn is_gap(&self, id: HeroId) -> bool {
        self.missing.binary_search(&id).is_ok()
    }

    pub fn get(&self, id: HeroId) -> Option<&HeroRecord> {
        self.heroes.get(&id)
    }

    pub fn display_name(&self, id: HeroId) -> Result<&str, AppError> {
        self.heroes
            .get(&id)
            .map(|hero| hero.localized_name.as_str())
            .ok_or(AppError::UnknownHero(id))
    }

    /// Display name, or a placeholder for ids that are not in the catalog.
    pub fn label(&self, id: HeroId) -> String {
        match self.display_name(id) {
            Ok(name) => name.to_string(),
            Err(_) => format!("Unknown hero: {}", id),
        }
    }

    /// `(id, name)` pairs for selection lists.
    pub fn choices(&self) -> Vec<(HeroId, &str)> {
        self.heroes
            .values()
            .map(|hero| (hero.id, hero.localized_name.as_str()))
            .collect()
    }

    /// Resolve a user token: a numeric id or a localized name (case-insensitive).
    pub fn resolve(&self, token: &str) -> Result<HeroId, AppError> {
        let token = token.trim();

        if let Ok(id) = token.parse::<HeroId>() {
            return if self.contains(id) {
                Ok(id)
            } else {
                Err(AppError::UnknownHero(id))
            };
        }

        self.heroes
            .values()
            .find(|hero| hero.localized_name.eq_ignore_ascii_case(token))
            .map(|hero| hero.id)
            .ok_or_else(|| AppError::InvalidRoster(format!("No hero named {:?}", token)))
    }
}
