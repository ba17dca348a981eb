//! The game state store: serialized read/update operations over the one
//! persisted session record.
//!
//! Every mutating operation is load → modify → persist in a single call, so
//! a load after a completed operation always observes it, and milestone
//! checks can never be split across two observers of the same count.

use crate::core::config::GameConfig;
use crate::core::player::{roster, Player};
use crate::core::state::{GameState, StateUpdate};

use super::backend::Storage;

/// Fixed key the session record is persisted under.
pub const GAME_STATE_KEY: &str = "tabletalk-game-state";

/// A reward unlocked by reaching a progress milestone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardGrant {
    /// Reward cursor value at the moment of the grant (pre-advance).
    pub index: u32,
    /// The suggestion text, `rewards[index mod len]`.
    pub text: String,
}

/// Read/update operations over the persisted `GameState`.
///
/// ## Example
///
/// ```
/// use tabletalk::store::{GameStore, MemoryStorage};
///
/// let mut store = GameStore::new(MemoryStorage::new());
/// store.set_players("Ana", "Bruno");
///
/// assert_eq!(store.current_player().unwrap().name, "Ana");
/// store.switch_turn();
/// assert_eq!(store.current_player().unwrap().name, "Bruno");
/// ```
pub struct GameStore<S: Storage> {
    storage: S,
    config: GameConfig,
}

impl<S: Storage> GameStore<S> {
    /// Create a store with the default configuration.
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, GameConfig::default())
    }

    /// Create a store with an explicit configuration.
    pub fn with_config(storage: S, config: GameConfig) -> Self {
        Self { storage, config }
    }

    /// The configuration this store was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Load the current state.
    ///
    /// A missing key or an unparseable stored value yields the default state;
    /// storage problems never reach gameplay.
    #[must_use]
    pub fn load(&self) -> GameState {
        let Some(raw) = self.storage.read(GAME_STATE_KEY) else {
            return GameState::default();
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(%err, "stored game state is unreadable, starting fresh");
                GameState::default()
            }
        }
    }

    fn persist(&mut self, state: &GameState) {
        let raw = serde_json::to_string(state).expect("game state serializes");
        self.storage.write(GAME_STATE_KEY, &raw);
    }

    /// Shallow-merge a partial update into the stored state and persist it.
    pub fn save(&mut self, update: StateUpdate) {
        let mut state = self.load();
        state.apply(update);
        self.persist(&state);
    }

    /// Establish the two-player roster and start the game.
    ///
    /// Names are trimmed. If either is empty after trimming, nothing changes:
    /// the presentation layer validates first, and the store refuses to
    /// corrupt state when it doesn't.
    pub fn set_players(&mut self, name1: &str, name2: &str) {
        let (name1, name2) = (name1.trim(), name2.trim());
        if name1.is_empty() || name2.is_empty() {
            tracing::debug!("rejecting player setup with a blank name");
            return;
        }
        self.save(
            StateUpdate::new()
                .with_players(roster(name1, name2))
                .with_game_started(true)
                .with_current_player_index(0),
        );
    }

    /// The player whose turn it is, or `None` before setup.
    #[must_use]
    pub fn current_player(&self) -> Option<Player> {
        self.load().current_player().cloned()
    }

    /// The player waiting for their turn, or `None` before setup.
    #[must_use]
    pub fn other_player(&self) -> Option<Player> {
        self.load().other_player().cloned()
    }

    /// Flip whose turn it is. No-op before setup.
    pub fn switch_turn(&mut self) {
        let mut state = self.load();
        state.switch_turn();
        self.persist(&state);
    }

    /// Record one answered prompt.
    ///
    /// Increments the answered count by exactly 1. When the new count lands
    /// on a reward-interval multiple, returns the granted reward and advances
    /// the reward cursor by 1; the check and the advance happen inside the
    /// same load/persist pair, so two calls can never observe one milestone.
    pub fn record_answer(&mut self) -> Option<RewardGrant> {
        let mut state = self.load();
        state.questions_answered += 1;

        let grant = if state.questions_answered % self.config.reward_interval == 0 {
            let index = state.current_reward_index;
            let text = self.config.reward_at(index).to_string();
            state.current_reward_index = index + 1;
            tracing::debug!(index, answered = state.questions_answered, "reward unlocked");
            Some(RewardGrant { index, text })
        } else {
            None
        };

        self.persist(&state);
        grant
    }

    /// Append a player-submitted free-text prompt.
    ///
    /// Collected for later curation; never fed back into selection. Blank
    /// submissions are dropped.
    pub fn add_user_question(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let mut state = self.load();
        state.user_questions.push(text.to_string());
        self.persist(&state);
    }

    /// The collected user-submitted prompts.
    #[must_use]
    pub fn user_questions(&self) -> Vec<String> {
        self.load().user_questions
    }

    /// Clear all persisted state.
    ///
    /// Leaves the store exactly as if it had never been initialized.
    pub fn reset(&mut self) {
        self.storage.remove(GAME_STATE_KEY);
        tracing::debug!("game state reset");
    }
}
