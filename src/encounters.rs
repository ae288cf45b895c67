use crate::battle::state::TurnRng;
use crate::creature::{Creature, CreatureStats};
use crate::errors::{DataError, DataResult};
use schema::{CreatureType, Move};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::debug;

/// Rejection-sampling attempts made before a habitat spawn gives up on its preference.
pub const MAX_HABITAT_RETRIES: usize = 8;

static CREATURE_CATALOG: LazyLock<DataResult<CreatureCatalog>> =
    LazyLock::new(|| CreatureCatalog::from_ron(include_str!("../data/creatures.ron")));

/// The shipped catalog of starter and wild creature templates.
pub fn creature_catalog() -> DataResult<&'static CreatureCatalog> {
    CREATURE_CATALOG.as_ref().map_err(Clone::clone)
}

/// Terrain a wild encounter happens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Habitat {
    Grass,
    Water,
    Rock,
}

impl Habitat {
    /// Creature types that prefer to live on this terrain.
    pub fn preferred_types(self) -> &'static [CreatureType] {
        match self {
            Habitat::Grass => &[
                CreatureType::Grass,
                CreatureType::Normal,
                CreatureType::Flying,
                CreatureType::Ground,
            ],
            Habitat::Water => &[CreatureType::Water, CreatureType::Electric],
            Habitat::Rock => &[CreatureType::Rock, CreatureType::Ground],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    pub creature_type: CreatureType,
    /// Inclusive level range a fresh creature is rolled in.
    pub levels: (u8, u8),
    /// Fixed stats; level-derived when absent.
    #[serde(default)]
    pub stats: Option<CreatureStats>,
    pub moves: Vec<Move>,
}

impl CreatureTemplate {
    pub fn instantiate(&self, level: u8) -> DataResult<Creature> {
        let mut builder = Creature::builder(self.name.clone(), self.creature_type, level)
            .with_moves(self.moves.clone());
        if let Some(stats) = self.stats {
            builder = builder.with_stats(stats);
        }
        Ok(builder.build()?)
    }

    fn roll(&self, rng: &mut TurnRng) -> DataResult<Creature> {
        let (low, high) = self.levels;
        let level = if low == high {
            low
        } else {
            rng.next_in_range(low, high, "wild level")
        };
        self.instantiate(level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub starters: Vec<CreatureTemplate>,
    pub wild: Vec<CreatureTemplate>,
}

impl CreatureCatalog {
    pub fn from_ron(source: &str) -> DataResult<Self> {
        ron::from_str(source).map_err(|e| DataError::Parse {
            source_name: "creature catalog".to_string(),
            details: e.to_string(),
        })
    }

    pub fn starter_names(&self) -> impl Iterator<Item = &str> {
        self.starters.iter().map(|template| template.name.as_str())
    }

    /// A fresh copy of the named starter, at full HP.
    pub fn starter(&self, name: &str) -> DataResult<Creature> {
        let template = self
            .starters
            .iter()
            .find(|template| template.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| DataError::UnknownCreature(name.to_string()))?;
        let (level, _) = template.levels;
        template.instantiate(level)
    }

    /// Any wild creature, chosen uniformly.
    pub fn random_wild(&self, rng: &mut TurnRng) -> DataResult<Creature> {
        if self.wild.is_empty() {
            return Err(DataError::EmptyCatalog);
        }
        let index = rng.next_index(self.wild.len(), "wild species");
        self.wild[index].roll(rng)
    }

    /// A wild creature whose type is in `preferred`, falling back to any wild
    /// creature after `MAX_HABITAT_RETRIES` misses.
    pub fn spawn_wild(
        &self,
        preferred: &[CreatureType],
        rng: &mut TurnRng,
    ) -> DataResult<Creature> {
        for attempt in 0..MAX_HABITAT_RETRIES {
            let candidate = self.random_wild(rng)?;
            if preferred.contains(&candidate.creature_type) {
                debug!(attempt, creature = %candidate.name, "habitat spawn accepted");
                return Ok(candidate);
            }
        }
        debug!("habitat spawn fell back to any wild creature");
        self.random_wild(rng)
    }
}

/// Spawn a wild creature for `habitat` from the shipped catalog.
pub fn spawn_wild_creature(habitat: Habitat, rng: &mut TurnRng) -> DataResult<Creature> {
    creature_catalog()?.spawn_wild(habitat.preferred_types(), rng)
}
