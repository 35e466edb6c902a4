//! Which levels has the player finished, tracked by name.
//!
//! Everything lives under one config key, `levels.completed`, as a JSON
//! array of completed-level names ("level <set> <n>"). Names rather than
//! indices survive reordering of level sets between releases, and
//! comparisons go through [`canonical_name`] so localized or user-typed
//! variants of a set name resolve to the same entries.
//!
//! The tracker caches nothing between calls: each operation re-reads the
//! persisted list with a single `get`, and writes back only when the list
//! actually changes.

use std::collections::{BTreeSet, HashSet};

use thiserror::Error;

use crate::canonical::{canonical_name, strip_number, EmptyName};
use crate::config::Config;
use crate::store::StoreError;

/// Key holding the completed-level list for all level sets.
pub const CFG_LEVELS_COMPLETED: &str = "levels.completed";

#[derive(Debug, Error)]
pub enum LevelsError {
    #[error("unknown level set: {0}")]
    UnknownLevelSet(String),

    #[error("level {index} is out of range for level set {set}")]
    LevelOutOfRange { set: String, index: usize },

    #[error("malformed completed-levels list: {0}")]
    BadListFormat(#[from] serde_json::Error),

    #[error(transparent)]
    EmptyName(#[from] EmptyName),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Where level sets and their level names come from (a directory scan in
/// the real game). Purely a lookup; nothing from here is stored.
pub trait LevelNames {
    /// The ordered level names of one set, index 0 holding level 1.
    /// `None` when no such set exists.
    fn names_in_dir(&self, level_set_dir: &str) -> Option<Vec<String>>;
}

pub struct LevelsCompleted<'a, N: LevelNames> {
    config: &'a mut Config,
    names: N,
}

impl<'a, N: LevelNames> LevelsCompleted<'a, N> {
    pub fn new(config: &'a mut Config, names: N) -> Self {
        LevelsCompleted { config, names }
    }

    /// How many levels of `level_set` the player has completed.
    ///
    /// The set may carry a menu-ordering prefix ("01_foo" resolves the set
    /// "foo"). Counts the set's known level names present in the persisted
    /// list; under strictly sequential completion that count is the highest
    /// finished level. Unknown sets read as 0.
    pub fn highest_level_completed(&self, level_set: &str) -> Result<usize, LevelsError> {
        let Some(names) = self.names.names_in_dir(strip_number(level_set)) else {
            return Ok(0);
        };

        let completed: HashSet<String> = self
            .read_completed()?
            .iter()
            .map(|name| canonical_name(name))
            .collect::<Result<_, _>>()?;

        let mut count = 0;
        for name in &names {
            if completed.contains(&canonical_name(name)?) {
                count += 1;
            }
        }
        Ok(count)
    }

    /// Records that level `level_index` (1-based) of `level_set` is done.
    ///
    /// Already-recorded levels are a strict no-op: one `get`, no `set`, no
    /// `save`. Otherwise the name is inserted keeping the persisted list in
    /// lexicographic order, then written back with exactly one `set`
    /// followed by one `save`.
    pub fn set_completed_level(
        &mut self,
        level_set: &str,
        level_index: usize,
    ) -> Result<(), LevelsError> {
        let dir = strip_number(level_set);
        let names = self
            .names
            .names_in_dir(dir)
            .ok_or_else(|| LevelsError::UnknownLevelSet(level_set.to_string()))?;

        let name = level_index
            .checked_sub(1)
            .and_then(|i| names.get(i))
            .ok_or_else(|| LevelsError::LevelOutOfRange {
                set: level_set.to_string(),
                index: level_index,
            })?;

        let current = self.read_completed()?;

        let target = canonical_name(name)?;
        for existing in &current {
            if canonical_name(existing)? == target {
                return Ok(());
            }
        }

        let mut all: BTreeSet<String> = current.into_iter().collect();
        all.insert(name.clone());

        log::debug!("recording completed level {name:?}");
        self.config
            .set(CFG_LEVELS_COMPLETED, &serde_json::to_string(&all)?);
        self.config.save()?;
        Ok(())
    }

    /// One `get`; absent or empty value is an empty list.
    fn read_completed(&self) -> Result<Vec<String>, LevelsError> {
        match self.config.get(CFG_LEVELS_COMPLETED) {
            None => Ok(Vec::new()),
            Some(raw) if raw.is_empty() => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(&raw)?),
        }
    }
}
