use self::{category::Category, section::Section};
use crate::error::Error;
use tracing::{debug, info};

pub mod category;
pub mod section;

/// Everything the form knows: the text being typed, the category it will be added to,
/// and the sections holding the items added so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    pending_item_text: String,
    selected_category: Category,
    sections: Vec<Section>,
}

impl Model {
    /// Creates an empty model with one section per category and the given category selected.
    #[must_use]
    pub fn new(default_category: Category) -> Self {
        Self {
            pending_item_text: String::new(),
            selected_category: default_category,
            sections: Category::ALL.into_iter().map(Section::new).collect(),
        }
    }

    #[must_use]
    pub fn pending_item_text(&self) -> &str {
        &self.pending_item_text
    }

    #[must_use]
    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up the section for a category.
    ///
    /// # Panics
    /// Only if the one-section-per-category invariant is broken, which `new` rules out.
    #[must_use]
    pub fn section(&self, category: Category) -> &Section {
        self.sections
            .iter()
            .find(|section| section.title == category)
            .unwrap_or_else(|| unreachable!("every category has a section"))
    }

    /// Replaces the text that will become the next item. Nothing is validated here.
    pub fn update_input_text<S: Into<String>>(&mut self, text: S) {
        self.pending_item_text = text.into();
    }

    pub fn update_selected_category(&mut self, category: Category) {
        if category != self.selected_category {
            debug!(%category, "selected category changed");
        }
        self.selected_category = category;
    }

    /// Selects a category from its name.
    ///
    /// # Errors
    /// Returns `Error::InvalidCategory` (and leaves the selection alone) if `name` is not
    /// one of the categories.
    pub fn select_category_by_name(&mut self, name: &str) -> Result<(), Error> {
        let category = name.parse()?;
        self.update_selected_category(category);
        Ok(())
    }

    /// Appends the pending text to the selected category's section and clears it.
    ///
    /// Returns `false` without touching anything if the pending text is blank. The text is
    /// stored as typed, surrounding whitespace included.
    pub fn add_item(&mut self) -> bool {
        if self.pending_item_text.trim().is_empty() {
            debug!("ignoring blank item");
            return false;
        }

        let category = self.selected_category;
        let Some(section) = self
            .sections
            .iter_mut()
            .find(|section| section.title == category)
        else {
            return false;
        };

        let item = std::mem::take(&mut self.pending_item_text);
        info!(%category, item = item.as_str(), "item added");
        section.items.push(item);
        true
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(Category::default())
    }
}
