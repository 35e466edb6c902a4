//! Versioned schema upgrades for the config store.
//!
//! Each release that changes the stored key layout ships one
//! [`ConfigUpgrade`]. Upgrades form an ordered chain; an upgrade's version
//! is its position in the chain plus one. On startup the driver runs every
//! upgrade newer than the stored `config.version`, oldest first, so a store
//! from any earlier release is brought forward without data loss.

use thiserror::Error;

use crate::store::{KeyValueStore, StoreError};

/// Key holding the schema version as a decimal string. Absent means
/// version 0 (a store never touched by any upgrade).
pub const CFG_VERSION: &str = "config.version";

#[derive(Debug, Error)]
pub enum UpgradeError {
    #[error("stored config.version {found:?} is not a number")]
    BadVersion { found: String },

    #[error("stored config.version {found} is newer than the latest known upgrade ({latest})")]
    VersionTooNew { found: u32, latest: u32 },

    #[error("upgrade {name} did not set config.version to {expected}")]
    VersionNotBumped { name: &'static str, expected: u32 },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One step of the schema upgrade chain.
///
/// `run` receives a store at exactly the previous version (possibly empty)
/// and must: touch only the keys its own migration concerns, treat absent
/// legacy keys as "nothing to migrate" rather than an error, and as its
/// last store effect set `config.version` to its own version number.
pub trait ConfigUpgrade {
    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;

    fn run(&self, store: &mut dyn KeyValueStore) -> Result<(), UpgradeError>;
}

/// The version-1 upgrade. Stores written before the upgrade chain existed
/// carry no version key at all; this step stamps them (and every fresh
/// store) with an explicit version and changes nothing else.
pub struct UpgradeTo01Dummy;

impl ConfigUpgrade for UpgradeTo01Dummy {
    fn name(&self) -> &'static str {
        "01_dummy"
    }

    fn run(&self, store: &mut dyn KeyValueStore) -> Result<(), UpgradeError> {
        store.set(CFG_VERSION, "1");
        Ok(())
    }
}

/// Brings `store` from whatever version it holds up to the end of
/// `upgrades`, saving once after the chain if anything ran.
///
/// Fatal conditions (the store is left alone and the caller must not
/// proceed): an unparseable stored version, a version newer than the chain
/// knows, any upgrade error, or an upgrade that forgot to bump the version.
pub(crate) fn upgrade_to_latest(
    store: &mut dyn KeyValueStore,
    upgrades: &[&dyn ConfigUpgrade],
) -> Result<(), UpgradeError> {
    if upgrades.is_empty() {
        return Ok(());
    }

    let latest = upgrades.len() as u32;
    let current = stored_version(store)?;
    if current > latest {
        return Err(UpgradeError::VersionTooNew {
            found: current,
            latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    for (i, upgrade) in upgrades.iter().enumerate() {
        let target = i as u32 + 1;
        if target <= current {
            continue;
        }

        log::info!("applying config upgrade {target}: {}", upgrade.name());
        upgrade.run(store)?;

        if stored_version(store)? != target {
            return Err(UpgradeError::VersionNotBumped {
                name: upgrade.name(),
                expected: target,
            });
        }
    }

    store.save()?;
    Ok(())
}

fn stored_version(store: &dyn KeyValueStore) -> Result<u32, UpgradeError> {
    match store.get(CFG_VERSION) {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| UpgradeError::BadVersion { found: raw }),
    }
}
