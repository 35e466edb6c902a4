//! The config facade.
//!
//! A [`Config`] wraps exactly one [`KeyValueStore`] for the lifetime of a
//! play session and applies any pending schema upgrades when constructed.
//! There is no process-wide config singleton; whoever needs config state
//! receives a `&Config` or `&mut Config` explicitly.

use crate::store::{KeyValueStore, StoreError};
use crate::upgrade::{self, ConfigUpgrade, UpgradeError, CFG_VERSION};

pub struct Config {
    store: Box<dyn KeyValueStore>,
}

impl Config {
    /// Wraps `store`, first bringing it up to the latest schema version.
    ///
    /// `upgrades` is the full ordered chain for this build; position + 1 is
    /// an upgrade's version. Any upgrade failure aborts construction so a
    /// store at an indeterminate version is never used.
    pub fn new(
        mut store: Box<dyn KeyValueStore>,
        upgrades: &[&dyn ConfigUpgrade],
    ) -> Result<Self, UpgradeError> {
        upgrade::upgrade_to_latest(store.as_mut(), upgrades)?;
        Ok(Config { store })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.store.set(key, value);
    }

    pub fn save(&mut self) -> Result<(), StoreError> {
        self.store.save()
    }

    /// `None` when the key is absent or not a decimal integer.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.trim().parse().ok()
    }

    pub fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, &value.to_string());
    }

    /// `None` when the key is absent or neither "true" nor "false".
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)?.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, if value { "true" } else { "false" });
    }

    /// Current schema version; 0 for a store no upgrade has stamped yet.
    pub fn version(&self) -> u32 {
        self.get(CFG_VERSION)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(0)
    }
}
