//! Cards2Cash client state layer.
//!
//! Everything the screens share that is more than pure logic: configuration,
//! the persistence and clipboard collaborators, the avatar and search
//! contexts, simulated network actions, and the conversion flow.

pub mod action;
pub mod avatar;
pub mod clipboard;
pub mod config;
pub mod convert;
pub mod error;
pub mod forms;
pub mod search;
pub mod storage;

pub use action::{ActionStatus, SimulatedAction, SimulatedBackend};
pub use avatar::AvatarContext;
pub use config::ClientConfig;
pub use error::{ActionError, ClipboardError, ConfigError, StorageError};
pub use search::SearchContext;
pub use storage::{KeyValueStore, MemoryStore};
