//! Persistent configuration for the game.
//!
//! Two jobs: evolving the on-disk config schema safely across releases
//! (an ordered, idempotent upgrade chain over an abstract key/value store),
//! and tracking which levels the player has completed per level set, keyed
//! by canonicalized names so localized or user-entered set names stay
//! stable on disk.
//!
//! The storage backend is injected behind [`KeyValueStore`]; this crate
//! never touches files or platform preferences itself.
//!
//! ```
//! use hutch::{Config, InMemoryStore, UpgradeTo01Dummy};
//!
//! let mut config =
//!     Config::new(Box::new(InMemoryStore::new()), &[&UpgradeTo01Dummy]).unwrap();
//! assert_eq!(config.version(), 1);
//!
//! config.set_bool("sound.muted", true);
//! assert_eq!(config.get_bool("sound.muted"), Some(true));
//! ```

pub mod canonical;
pub mod config;
pub mod levels;
pub mod store;
pub mod upgrade;

pub use canonical::{canonical_name, strip_number, EmptyName};
pub use config::Config;
pub use levels::{LevelNames, LevelsCompleted, LevelsError, CFG_LEVELS_COMPLETED};
pub use store::{InMemoryStore, KeyValueStore, StoreError};
pub use upgrade::{ConfigUpgrade, UpgradeError, UpgradeTo01Dummy, CFG_VERSION};
