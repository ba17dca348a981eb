//! The round/progress state machine tying store, selector, and catalog
//! together.

pub mod machine;

pub use machine::{AnswerOutcome, RoundError, RoundMachine, RoundPhase};
