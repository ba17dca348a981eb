//! Persistence: storage backends and the game state store.

pub mod backend;
pub mod game_store;

pub use backend::{FileStorage, MemoryStorage, Storage};
pub use game_store::{GameStore, RewardGrant, GAME_STATE_KEY};
