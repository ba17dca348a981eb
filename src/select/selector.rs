//! Random selection of unshown prompts.
//!
//! The selector draws uniformly among catalog prompts that pass the category
//! filter and are not in the round's seen set. It owns an injected
//! deterministic RNG, so tests can pin the seed and assert exact picks.
//!
//! Exhaustion is a typed, recoverable signal: callers either widen the pool
//! (`pick_with_fallback` retries with the full catalog) or tell the player
//! the category has run dry.

use thiserror::Error;

use crate::catalog::{CategoryFilter, Prompt, PromptCatalog};
use crate::core::GameRng;

use super::seen::SeenPrompts;

/// Selection failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// No unshown prompt matches the requested category.
    #[error("no unshown prompt matches the requested category")]
    Exhausted,
}

/// Uniform random prompt selection with exclusion.
pub struct QuestionSelector {
    rng: GameRng,
}

impl QuestionSelector {
    /// Create a selector with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a selector seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Pick an unshown prompt passing the filter, uniformly at random.
    ///
    /// Candidates are ordered by ID before the draw, so a seeded selector is
    /// fully deterministic regardless of catalog iteration order.
    pub fn pick<'a>(
        &mut self,
        catalog: &'a PromptCatalog,
        filter: CategoryFilter,
        seen: &SeenPrompts,
    ) -> Result<&'a Prompt, SelectionError> {
        let mut eligible: Vec<&Prompt> = catalog
            .in_category(filter)
            .filter(|p| !seen.contains(p.id))
            .collect();
        eligible.sort_by_key(|p| p.id);

        self.rng
            .choose(&eligible)
            .copied()
            .ok_or(SelectionError::Exhausted)
    }

    /// Pick with the category-exhaustion fallback policy.
    ///
    /// When a concrete category has no unshown prompts left, the pool widens
    /// to the full catalog (minus exclusions) before exhaustion is reported.
    pub fn pick_with_fallback<'a>(
        &mut self,
        catalog: &'a PromptCatalog,
        filter: CategoryFilter,
        seen: &SeenPrompts,
    ) -> Result<&'a Prompt, SelectionError> {
        match self.pick(catalog, filter, seen) {
            Ok(prompt) => Ok(prompt),
            Err(SelectionError::Exhausted) if filter != CategoryFilter::Any => {
                tracing::trace!(%filter, "category exhausted, widening to full catalog");
                self.pick(catalog, CategoryFilter::Any, seen)
            }
            Err(err) => Err(err),
        }
    }

    /// Pick a replacement for the currently displayed prompt from the same
    /// category.
    ///
    /// Excludes the current prompt itself on top of the seen set. This is a
    /// pure selection: no progress or turn state is touched, and there is no
    /// fallback to other categories.
    pub fn refresh<'a>(
        &mut self,
        catalog: &'a PromptCatalog,
        current: &Prompt,
        seen: &SeenPrompts,
    ) -> Result<&'a Prompt, SelectionError> {
        let mut eligible: Vec<&Prompt> = catalog
            .in_category(CategoryFilter::Only(current.category))
            .filter(|p| p.id != current.id && !seen.contains(p.id))
            .collect();
        eligible.sort_by_key(|p| p.id);

        self.rng
            .choose(&eligible)
            .copied()
            .ok_or(SelectionError::Exhausted)
    }
}
