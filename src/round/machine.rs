//! The round/progress state machine.
//!
//! ## States
//!
//! `AwaitingCategory → PromptDisplayed → (answer | refresh)`, with
//! `RewardShown` entered when an answer lands on a reward milestone. A
//! pending reward blocks category choice until acknowledged; acknowledgment
//! clears the round-local exclusion set and starts a new round.
//!
//! ## Ordering
//!
//! `answer` applies mutations in a fixed order: record the answer (and
//! compute the reward), switch the turn when no reward fired, then select
//! the next prompt. When to *reveal* the selected prompt is a presentation
//! concern: callers may delay it for an exit animation, and nothing here
//! depends on that delay.

use thiserror::Error;

use crate::catalog::{CategoryFilter, Prompt, PromptCatalog, PromptId};
use crate::select::{QuestionSelector, SeenPrompts, SelectionError};
use crate::store::{GameStore, RewardGrant, Storage};

/// Machine phase, visible to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// No live prompt; waiting for a category choice.
    AwaitingCategory,
    /// A prompt is current; it can be answered or refreshed.
    PromptDisplayed,
    /// A reward is pending acknowledgment; category choice is blocked.
    RewardShown,
}

enum Phase {
    AwaitingCategory,
    PromptDisplayed { prompt: PromptId },
    RewardShown { reward: RewardGrant },
}

/// What an answer led to.
#[derive(Clone, Debug, PartialEq)]
pub enum AnswerOutcome {
    /// The turn switched and the next prompt is current.
    Next(Prompt),
    /// A reward milestone was hit; acknowledge it to continue.
    Reward(RewardGrant),
    /// Progress and turn were applied, but the whole catalog is spent;
    /// the machine is back to awaiting a category.
    Exhausted,
}

/// Operation attempted in the wrong phase, or with no prompts left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("a prompt is already displayed or a reward is pending")]
    CategoryNotExpected,
    #[error("no prompt is currently displayed")]
    NoPromptDisplayed,
    #[error("no reward is pending acknowledgment")]
    NoRewardPending,
    #[error(transparent)]
    Selection(#[from] SelectionError),
}

/// Coordinates the store, the selector, and the catalog for one session.
///
/// ## Example
///
/// ```
/// use tabletalk::catalog::{Category, PromptCatalog};
/// use tabletalk::round::RoundMachine;
/// use tabletalk::select::QuestionSelector;
/// use tabletalk::store::{GameStore, MemoryStorage};
///
/// let mut store = GameStore::new(MemoryStorage::new());
/// store.set_players("Ana", "Bruno");
///
/// let mut machine = RoundMachine::with_selector(
///     store,
///     PromptCatalog::builtin(),
///     QuestionSelector::new(42),
/// );
///
/// let prompt = machine.choose_category(Category::Divertido.into()).unwrap();
/// assert_eq!(prompt.category, Category::Divertido);
/// ```
pub struct RoundMachine<S: Storage> {
    store: GameStore<S>,
    selector: QuestionSelector,
    catalog: PromptCatalog,
    seen: SeenPrompts,
    phase: Phase,
    answered_this_round: u32,
}

impl<S: Storage> RoundMachine<S> {
    /// Create a machine with an entropy-seeded selector.
    pub fn new(store: GameStore<S>, catalog: PromptCatalog) -> Self {
        Self::with_selector(store, catalog, QuestionSelector::from_entropy())
    }

    /// Create a machine with an explicit selector (seeded in tests).
    pub fn with_selector(
        store: GameStore<S>,
        catalog: PromptCatalog,
        selector: QuestionSelector,
    ) -> Self {
        Self {
            store,
            selector,
            catalog,
            seen: SeenPrompts::new(),
            phase: Phase::AwaitingCategory,
            answered_this_round: 0,
        }
    }

    /// Current machine phase.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        match self.phase {
            Phase::AwaitingCategory => RoundPhase::AwaitingCategory,
            Phase::PromptDisplayed { .. } => RoundPhase::PromptDisplayed,
            Phase::RewardShown { .. } => RoundPhase::RewardShown,
        }
    }

    /// The prompt currently displayed, if any.
    #[must_use]
    pub fn current_prompt(&self) -> Option<&Prompt> {
        match self.phase {
            Phase::PromptDisplayed { prompt } => self.catalog.get(prompt),
            _ => None,
        }
    }

    /// The reward awaiting acknowledgment, if any.
    #[must_use]
    pub fn pending_reward(&self) -> Option<&RewardGrant> {
        match &self.phase {
            Phase::RewardShown { reward } => Some(reward),
            _ => None,
        }
    }

    /// The round indicator value ("N" of "N/round_length").
    ///
    /// Starts at the configured baseline, advances per answer, capped at the
    /// round length, and restarts when a reward is acknowledged.
    #[must_use]
    pub fn round_progress(&self) -> u32 {
        let config = self.store.config();
        (config.progress_baseline + self.answered_this_round).min(config.round_length)
    }

    /// The prompts shown so far this round.
    #[must_use]
    pub fn seen(&self) -> &SeenPrompts {
        &self.seen
    }

    /// The underlying store, for read-only collaborators (end screen).
    #[must_use]
    pub fn store(&self) -> &GameStore<S> {
        &self.store
    }

    /// The underlying store, for mutating collaborators (setup, reset).
    pub fn store_mut(&mut self) -> &mut GameStore<S> {
        &mut self.store
    }

    /// The catalog this machine draws from.
    #[must_use]
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Choose a category and make a prompt current.
    ///
    /// Falls back to the full catalog when the category has no unshown
    /// prompts left; reports exhaustion only once the whole catalog is spent.
    pub fn choose_category(&mut self, filter: CategoryFilter) -> Result<Prompt, RoundError> {
        if !matches!(self.phase, Phase::AwaitingCategory) {
            return Err(RoundError::CategoryNotExpected);
        }

        let prompt = self
            .selector
            .pick_with_fallback(&self.catalog, filter, &self.seen)?
            .clone();
        self.seen.record(prompt.id);
        self.phase = Phase::PromptDisplayed { prompt: prompt.id };
        Ok(prompt)
    }

    /// Swap the current prompt for another unshown one in the same category.
    ///
    /// A distinct action from answering: no progress is recorded and the turn
    /// does not change. On exhaustion the current prompt stays displayed.
    pub fn refresh(&mut self) -> Result<Prompt, RoundError> {
        let current_id = match self.phase {
            Phase::PromptDisplayed { prompt } => prompt,
            _ => return Err(RoundError::NoPromptDisplayed),
        };

        let current = self.catalog.get_unchecked(current_id);
        let replacement = self.selector.refresh(&self.catalog, current, &self.seen)?.clone();
        self.seen.record(replacement.id);
        self.phase = Phase::PromptDisplayed {
            prompt: replacement.id,
        };
        Ok(replacement)
    }

    /// Answer the current prompt and advance.
    ///
    /// Records the answer first; on a reward milestone the machine moves to
    /// `RewardShown` without switching the turn. Otherwise the turn switches
    /// and the next prompt is drawn from `next_filter` (with the full-catalog
    /// fallback).
    pub fn answer(&mut self, next_filter: CategoryFilter) -> Result<AnswerOutcome, RoundError> {
        if !matches!(self.phase, Phase::PromptDisplayed { .. }) {
            return Err(RoundError::NoPromptDisplayed);
        }

        self.answered_this_round += 1;

        if let Some(reward) = self.store.record_answer() {
            self.phase = Phase::RewardShown {
                reward: reward.clone(),
            };
            return Ok(AnswerOutcome::Reward(reward));
        }

        self.store.switch_turn();

        match self
            .selector
            .pick_with_fallback(&self.catalog, next_filter, &self.seen)
        {
            Ok(prompt) => {
                let prompt = prompt.clone();
                self.seen.record(prompt.id);
                self.phase = Phase::PromptDisplayed { prompt: prompt.id };
                Ok(AnswerOutcome::Next(prompt))
            }
            Err(SelectionError::Exhausted) => {
                self.phase = Phase::AwaitingCategory;
                Ok(AnswerOutcome::Exhausted)
            }
        }
    }

    /// Acknowledge a pending reward and start the next round.
    ///
    /// Clears the round-local exclusion set and the round indicator.
    pub fn acknowledge_reward(&mut self) -> Result<(), RoundError> {
        if !matches!(self.phase, Phase::RewardShown { .. }) {
            return Err(RoundError::NoRewardPending);
        }

        self.seen.clear();
        self.answered_this_round = 0;
        self.phase = Phase::AwaitingCategory;
        Ok(())
    }
}
