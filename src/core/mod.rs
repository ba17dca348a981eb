//! Core types: players, RNG, configuration, the persisted state record.
//!
//! These are the building blocks the store, selector, and round machine are
//! assembled from. Nothing here touches storage or makes decisions.

pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{
    GameConfig, DEFAULT_PROGRESS_BASELINE, DEFAULT_REWARDS, DEFAULT_REWARD_INTERVAL,
    DEFAULT_ROUND_LENGTH,
};
pub use player::{roster, Player, PlayerId, Roster};
pub use rng::GameRng;
pub use state::{GameState, StateUpdate};
