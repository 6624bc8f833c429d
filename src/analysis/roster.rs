use crate::data::models::HeroId;
use crate::error::AppError;
use std::collections::BTreeSet;

pub const MAX_TEAM_SIZE: usize = 5;

/// Heroes drafted by one side. No duplicates, at most five.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    heroes: BTreeSet<HeroId>,
}

impl TeamRoster {
    pub fn new<I>(ids: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = HeroId>,
    {
        let mut heroes = BTreeSet::new();
        for id in ids {
            if !heroes.insert(id) {
                return Err(AppError::InvalidRoster(format!(
                    "hero {} appears twice in the same team",
                    id
                )));
            }
        }

        if heroes.len() > MAX_TEAM_SIZE {
            return Err(AppError::InvalidRoster(format!(
                "a team has at most {} heroes, got {}",
                MAX_TEAM_SIZE,
                heroes.len()
            )));
        }

        Ok(TeamRoster { heroes })
    }

    pub fn len(&self) -> usize {
        self.heroes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heroes.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heroes.len() >= MAX_TEAM_SIZE
    }

    pub fn contains(&self, id: HeroId) -> bool {
        self.heroes.contains(&id)
    }

    /// Ascending hero ids.
    pub fn iter(&self) -> impl Iterator<Item = HeroId> + '_ {
        self.heroes.iter().copied()
    }

    /// Copy of this roster with `hero` added. Callers check `is_full` first.
    pub fn with(&self, hero: HeroId) -> TeamRoster {
        let mut heroes = self.heroes.clone();
        heroes.insert(hero);
        TeamRoster { heroes }
    }

    pub fn overlap<'a>(&'a self, other: &'a TeamRoster) -> impl Iterator<Item = HeroId> + 'a {
        self.heroes.intersection(&other.heroes).copied()
    }
}
