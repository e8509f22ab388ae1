const PROMPT_PREFIX: &str = "Help me with ";

/// A quick-start prompt shown as a chip above the prompt bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Message text submitted when the chip is picked
    pub fn prompt(&self) -> String {
        format!("{}{}", PROMPT_PREFIX, self.label.to_lowercase())
    }
}

/// Fixed, ordered set of suggestions. Built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionCatalog {
    items: Vec<Suggestion>,
}

impl SuggestionCatalog {
    pub fn new(items: Vec<Suggestion>) -> Self {
        Self { items }
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            Suggestion::new("seo", "SEO Keyword Generator"),
            Suggestion::new("nurturing", "Lead Nurturing"),
            Suggestion::new("thread", "X Thread Generator"),
        ])
    }

    pub fn list(&self) -> &[Suggestion] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Suggestion> {
        self.items.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for SuggestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
