//! The persisted game-state record and partial updates to it.
//!
//! ## GameState
//!
//! The single session record: roster, whose turn it is, answered-prompt
//! count, reward cursor, and collected user-submitted questions. Serialized
//! as one JSON object with camelCase keys, the shape the storage layer
//! persists under its fixed key.
//!
//! ## StateUpdate
//!
//! A partial record for shallow field replacement. `GameStore::save` merges
//! one of these into the loaded state and writes the result back.

use serde::{Deserialize, Serialize};

use super::player::{Player, Roster};

/// The persisted session record.
///
/// `Default` is the never-initialized state: empty roster, zero counters,
/// game not started. Loading corrupt or missing storage falls back to this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Ordered pair of players; empty before setup.
    pub players: Roster,

    /// Whose turn it is to answer: 0 or 1 whenever the roster is set.
    pub current_player_index: u8,

    /// Prompts answered over the session lifetime. Monotonic; reset only by
    /// an explicit `reset`.
    pub questions_answered: u32,

    /// Reward cursor. Grows without bound; the reward list length is applied
    /// at lookup, never here.
    pub current_reward_index: u32,

    /// True iff the two-player roster is set.
    pub game_started: bool,

    /// Free-text prompts submitted by players, collected for later curation.
    /// Never read back into selection.
    pub user_questions: Vec<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            players: Roster::new(),
            current_player_index: 0,
            questions_answered: 0,
            current_reward_index: 0,
            game_started: false,
            user_questions: Vec::new(),
        }
    }
}

impl GameState {
    /// Whether the two-player roster is set.
    #[must_use]
    pub fn has_roster(&self) -> bool {
        self.players.len() == 2
    }

    /// The player whose turn it is, or `None` before setup.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        if !self.has_roster() {
            return None;
        }
        self.players.get(self.current_player_index as usize)
    }

    /// The player waiting for their turn, or `None` before setup.
    #[must_use]
    pub fn other_player(&self) -> Option<&Player> {
        if !self.has_roster() {
            return None;
        }
        let other = if self.current_player_index == 0 { 1 } else { 0 };
        self.players.get(other)
    }

    /// Flip whose turn it is. No-op before setup.
    pub fn switch_turn(&mut self) {
        if self.has_roster() {
            self.current_player_index = if self.current_player_index == 0 { 1 } else { 0 };
        }
    }

    /// Shallow-merge a partial update into this record.
    ///
    /// Fields present in the update replace the stored value wholesale;
    /// absent fields are untouched.
    pub fn apply(&mut self, update: StateUpdate) {
        if let Some(players) = update.players {
            self.players = players;
        }
        if let Some(index) = update.current_player_index {
            self.current_player_index = index;
        }
        if let Some(count) = update.questions_answered {
            self.questions_answered = count;
        }
        if let Some(cursor) = update.current_reward_index {
            self.current_reward_index = cursor;
        }
        if let Some(started) = update.game_started {
            self.game_started = started;
        }
        if let Some(questions) = update.user_questions {
            self.user_questions = questions;
        }
    }
}

/// A partial `GameState` for shallow merges.
#[derive(Clone, Debug, Default)]
pub struct StateUpdate {
    pub players: Option<Roster>,
    pub current_player_index: Option<u8>,
    pub questions_answered: Option<u32>,
    pub current_reward_index: Option<u32>,
    pub game_started: Option<bool>,
    pub user_questions: Option<Vec<String>>,
}

impl StateUpdate {
    /// Create an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the roster.
    #[must_use]
    pub fn with_players(mut self, players: Roster) -> Self {
        self.players = Some(players);
        self
    }

    /// Replace the current player index.
    #[must_use]
    pub fn with_current_player_index(mut self, index: u8) -> Self {
        self.current_player_index = Some(index);
        self
    }

    /// Replace the answered-prompt count.
    #[must_use]
    pub fn with_questions_answered(mut self, count: u32) -> Self {
        self.questions_answered = Some(count);
        self
    }

    /// Replace the reward cursor.
    #[must_use]
    pub fn with_current_reward_index(mut self, cursor: u32) -> Self {
        self.current_reward_index = Some(cursor);
        self
    }

    /// Replace the game-started flag.
    #[must_use]
    pub fn with_game_started(mut self, started: bool) -> Self {
        self.game_started = Some(started);
        self
    }

    /// Replace the collected user questions.
    #[must_use]
    pub fn with_user_questions(mut self, questions: Vec<String>) -> Self {
        self.user_questions = Some(questions);
        self
    }
}
