use super::category::Category;

/// A titled bucket holding the items added to one category, in the order they were added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub title: Category,
    pub items: Vec<String>,
}

impl Section {
    /// Creates an empty section for the given category.
    #[must_use]
    pub fn new(title: Category) -> Self {
        Self {
            title,
            items: vec![],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
