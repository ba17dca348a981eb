//! Prompt definitions: identifiers, categories, and the prompt record.
//!
//! Prompts are static input loaded from a catalog at startup. The core never
//! mutates one.

use serde::{Deserialize, Serialize};

/// Unique prompt identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PromptId(pub u32);

impl PromptId {
    /// Create a new prompt ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prompt({})", self.0)
    }
}

/// Closed set of prompt themes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Conocernos,
    Emocional,
    Divertido,
    Picante,
}

impl Category {
    /// All concrete categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Conocernos,
        Category::Emocional,
        Category::Divertido,
        Category::Picante,
    ];

    /// The lowercase tag used in catalog data.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Category::Conocernos => "conocernos",
            Category::Emocional => "emocional",
            Category::Divertido => "divertido",
            Category::Picante => "picante",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A category request: either one concrete theme or the "any" sentinel that
/// leaves the catalog unfiltered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No filter; the whole catalog is eligible.
    Any,
    /// Only prompts tagged with this category.
    Only(Category),
}

impl CategoryFilter {
    /// Whether a prompt with the given category passes this filter.
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::Any => f.write_str("any"),
            CategoryFilter::Only(category) => write!(f, "{category}"),
        }
    }
}

/// A single tagged conversation prompt.
///
/// Serialized as `{id, category, question}`, the catalog interchange format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub category: Category,
    #[serde(rename = "question")]
    pub text: String,
}

impl Prompt {
    /// Create a new prompt.
    pub fn new(id: PromptId, category: Category, text: impl Into<String>) -> Self {
        Self {
            id,
            category,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_id() {
        let id = PromptId::new(5);
        assert_eq!(id.raw(), 5);
        assert_eq!(format!("{}", id), "Prompt(5)");
    }

    #[test]
    fn test_category_tags() {
        assert_eq!(Category::Conocernos.tag(), "conocernos");
        assert_eq!(format!("{}", Category::Picante), "picante");
        assert_eq!(Category::ALL.len(), 4);
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::Any.matches(Category::Divertido));
        assert!(CategoryFilter::Only(Category::Emocional).matches(Category::Emocional));
        assert!(!CategoryFilter::Only(Category::Emocional).matches(Category::Picante));
    }

    #[test]
    fn test_filter_from_category() {
        let filter: CategoryFilter = Category::Divertido.into();
        assert_eq!(filter, CategoryFilter::Only(Category::Divertido));
        assert_eq!(format!("{}", filter), "divertido");
        assert_eq!(format!("{}", CategoryFilter::Any), "any");
    }

    #[test]
    fn test_prompt_interchange_format() {
        let json = r#"{"id": 3, "category": "emocional", "question": "¿Qué te asusta?"}"#;
        let prompt: Prompt = serde_json::from_str(json).unwrap();

        assert_eq!(prompt.id, PromptId::new(3));
        assert_eq!(prompt.category, Category::Emocional);
        assert_eq!(prompt.text, "¿Qué te asusta?");

        let back = serde_json::to_string(&prompt).unwrap();
        assert!(back.contains("\"question\""));
        assert!(back.contains("\"emocional\""));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"id": 1, "category": "mystery", "question": "?"}"#;
        assert!(serde_json::from_str::<Prompt>(json).is_err());
    }
}
