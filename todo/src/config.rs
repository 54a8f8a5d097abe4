//! Configuration management for a todo session.
//!
//! Loads configuration from environment variables with sensible defaults.
//!
//! | Variable           | Values                                         | Default           |
//! |--------------------|------------------------------------------------|-------------------|
//! | `TODO_SEED`        | `frontend-mentor`, `starter`, `empty`          | `frontend-mentor` |
//! | `TODO_SEED_FILE`   | path to a JSON seed file (overrides the above) | unset             |
//! | `TODO_FILTER`      | `all`, `active`, `completed`                   | `all`             |
//! | `TODO_ID_STRATEGY` | `uuid`, `sequential`                           | `uuid`            |

use crate::reducer::TodoEnvironment;
use crate::seed::{self, SeedError};
use crate::types::{Filter, TodoItem, TodoState};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tidy_core::environment::{SequentialIdGenerator, UuidIdGenerator};

/// Errors building a session from configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `TODO_SEED` names no built-in seed
    #[error("unknown seed {0:?}, expected one of: frontend-mentor, starter, empty")]
    UnknownSeed(String),

    /// `TODO_ID_STRATEGY` names no strategy
    #[error("unknown id strategy {0:?}, expected one of: uuid, sequential")]
    UnknownIdStrategy(String),

    /// The seed file could not be read
    #[error("failed to read seed file {path}: {source}")]
    ReadSeedFile {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The seed file did not hold valid seed data
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Where the initial items come from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Six sample items
    #[default]
    FrontendMentor,
    /// Four sample items
    Starter,
    /// No items
    Empty,
    /// JSON file on disk
    File(PathBuf),
}

impl FromStr for SeedSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frontend-mentor" => Ok(Self::FrontendMentor),
            "starter" => Ok(Self::Starter),
            "empty" => Ok(Self::Empty),
            _ => Err(ConfigError::UnknownSeed(s.to_string())),
        }
    }
}

/// How ids for new items are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Random v4 UUIDs
    #[default]
    Uuid,
    /// Counter continuing after the seed ids
    Sequential,
}

impl FromStr for IdStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "sequential" => Ok(Self::Sequential),
            _ => Err(ConfigError::UnknownIdStrategy(s.to_string())),
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, Default)]
pub struct TodoConfig {
    /// Initial items
    pub seed: SeedSource,
    /// Initial filter
    pub initial_filter: Filter,
    /// Id generation for added items
    pub id_strategy: IdStrategy,
}

impl TodoConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// An unrecognised `TODO_FILTER` falls back to `all`; unrecognised seed
    /// names and id strategies are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = match lookup("TODO_SEED_FILE") {
            Some(path) => SeedSource::File(PathBuf::from(path)),
            None => lookup("TODO_SEED")
                .map(|s| s.parse::<SeedSource>())
                .transpose()?
                .unwrap_or_default(),
        };

        let initial_filter = lookup("TODO_FILTER")
            .map(|s| Filter::parse_or_all(&s))
            .unwrap_or_default();

        let id_strategy = lookup("TODO_ID_STRATEGY")
            .map(|s| s.parse::<IdStrategy>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            seed,
            initial_filter,
            id_strategy,
        })
    }

    /// Load the seed items
    pub fn seed_items(&self) -> Result<Vec<TodoItem>, ConfigError> {
        match &self.seed {
            SeedSource::FrontendMentor => Ok(seed::frontend_mentor()),
            SeedSource::Starter => Ok(seed::starter()),
            SeedSource::Empty => Ok(Vec::new()),
            SeedSource::File(path) => {
                let json =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::ReadSeedFile {
                        path: path.clone(),
                        source,
                    })?;
                Ok(seed::from_json(&json)?)
            }
        }
    }

    /// Build the initial state: seed items with the configured filter
    pub fn initial_state(&self) -> Result<TodoState, ConfigError> {
        let mut state = TodoState::with_items(self.seed_items()?);
        state.active_filter = self.initial_filter;
        Ok(state)
    }

    /// Build the reducer environment for a session starting from `state`
    ///
    /// The sequential strategy starts after the largest numeric seed id. If
    /// that id is `u64::MAX` it starts at 1 instead; the reducer skips any id
    /// already in the list.
    #[must_use]
    pub fn environment(&self, state: &TodoState) -> TodoEnvironment {
        match self.id_strategy {
            IdStrategy::Uuid => TodoEnvironment::new(Arc::new(UuidIdGenerator)),
            IdStrategy::Sequential => {
                let next = state
                    .items
                    .iter()
                    .filter_map(|item| item.id.as_str().parse::<u64>().ok())
                    .max()
                    .and_then(|max| max.checked_add(1))
                    .unwrap_or(1);
                TodoEnvironment::new(Arc::new(SequentialIdGenerator::starting_at(next)))
            }
        }
    }
}
