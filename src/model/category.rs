use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The fixed set of buckets an item can be sorted into.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Category {
    #[default]
    Fruits,
    Vegetables,
}

impl Category {
    /// Every category, in the order the sections are displayed.
    pub const ALL: [Category; 2] = [Category::Fruits, Category::Vegetables];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Fruits => "Fruits",
            Category::Vegetables => "Vegetables",
        }
    }

    /// The category after this one in `ALL`, wrapping around at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let index = self.index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// The category before this one in `ALL`, wrapping around at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let index = self.index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        match self {
            Category::Fruits => 0,
            Category::Vegetables => 1,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::InvalidCategory(value.to_string()))
    }
}
