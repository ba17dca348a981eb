//! Prompt catalog: registration, lookup, and category narrowing.
//!
//! The `PromptCatalog` holds every prompt available to a session. It is
//! read-only input to the round machine: loaded once at startup, never
//! persisted or mutated by gameplay.

use rustc_hash::FxHashMap;

use super::prompt::{Category, CategoryFilter, Prompt, PromptId};

/// Embedded default prompt set.
const BUILTIN_PROMPTS: &str = include_str!("../../data/prompts.json");

/// Catalog of conversation prompts.
///
/// ## Example
///
/// ```
/// use tabletalk::catalog::{Category, CategoryFilter, PromptCatalog};
///
/// let mut catalog = PromptCatalog::new();
/// let id = catalog.register_auto(Category::Divertido, "¿Cuál es tu chiste favorito?");
///
/// let found = catalog.get(id).unwrap();
/// assert_eq!(found.category, Category::Divertido);
/// assert_eq!(catalog.in_category(CategoryFilter::Any).count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PromptCatalog {
    prompts: FxHashMap<PromptId, Prompt>,
    next_id: u32,
}

impl PromptCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the game.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_PROMPTS).expect("builtin prompt data is valid")
    }

    /// Load a catalog from the `[{id, category, question}]` JSON format.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let prompts: Vec<Prompt> = serde_json::from_str(data)?;
        let mut catalog = Self::new();
        for prompt in prompts {
            catalog.register(prompt);
        }
        Ok(catalog)
    }

    /// Register a prompt.
    ///
    /// Panics if a prompt with the same ID already exists.
    pub fn register(&mut self, prompt: Prompt) {
        if self.prompts.contains_key(&prompt.id) {
            panic!("Prompt with ID {:?} already registered", prompt.id);
        }
        self.next_id = self.next_id.max(prompt.id.raw() + 1);
        self.prompts.insert(prompt.id, prompt);
    }

    /// Register a prompt with an auto-assigned ID.
    ///
    /// Returns the assigned ID.
    pub fn register_auto(&mut self, category: Category, text: impl Into<String>) -> PromptId {
        let id = PromptId::new(self.next_id);
        self.register(Prompt::new(id, category, text));
        id
    }

    /// Get a prompt by ID.
    #[must_use]
    pub fn get(&self, id: PromptId) -> Option<&Prompt> {
        self.prompts.get(&id)
    }

    /// Get a prompt by ID, panicking if not found.
    ///
    /// Use when the ID is known to come from this catalog.
    #[must_use]
    pub fn get_unchecked(&self, id: PromptId) -> &Prompt {
        self.prompts.get(&id).expect("Prompt not found in catalog")
    }

    /// Check if a prompt ID is registered.
    #[must_use]
    pub fn contains(&self, id: PromptId) -> bool {
        self.prompts.contains_key(&id)
    }

    /// Number of registered prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    /// Iterate over all prompts.
    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.values()
    }

    /// Iterate over prompts passing a category filter.
    ///
    /// `CategoryFilter::Any` yields the whole catalog.
    pub fn in_category(&self, filter: CategoryFilter) -> impl Iterator<Item = &Prompt> {
        self.prompts
            .values()
            .filter(move |p| filter.matches(p.category))
    }
}
