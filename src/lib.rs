//! # tabletalk
//!
//! The core of a two-player conversation card game: players take turns
//! answering prompts drawn from tagged categories, and answering accrues
//! progress that periodically unlocks a bonus reward suggestion.
//!
//! This crate is the game's logic only. Presentation (layout, animation,
//! navigation) lives outside and drives the core through a small state-access
//! surface, rendering whatever it returns.
//!
//! ## Design Principles
//!
//! 1. **One persisted record**: All session state is a single JSON document
//!    behind an injected `Storage` backend. Corrupt or missing data degrades
//!    to a fresh session, never to an error.
//!
//! 2. **Injected randomness**: Prompt selection runs on a seedable RNG, so
//!    tests pin seeds and assert exact draws.
//!
//! 3. **Configuration over folklore**: Reward cadence, round length, and the
//!    progress baseline are explicit `GameConfig` values with defaults.
//!
//! 4. **Synchronous transitions**: Every state change completes within the
//!    call that triggered it. Reveal timing around animations is the
//!    caller's concern and never affects correctness.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, the persisted state record
//! - `store`: storage backends and the game state store
//! - `catalog`: static tagged prompts and their registry
//! - `select`: random prompt selection with round-local exclusion
//! - `round`: the round/progress state machine

pub mod catalog;
pub mod core;
pub mod round;
pub mod select;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, GameState, Player, PlayerId, Roster, StateUpdate, DEFAULT_REWARDS,
};

pub use crate::store::{FileStorage, GameStore, MemoryStorage, RewardGrant, Storage};

pub use crate::catalog::{Category, CategoryFilter, Prompt, PromptCatalog, PromptId};

pub use crate::select::{QuestionSelector, SeenPrompts, SelectionError};

pub use crate::round::{AnswerOutcome, RoundError, RoundMachine, RoundPhase};
