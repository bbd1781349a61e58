//! Animal type tag driving image selection
//!
//! The tag names match the element names the pet list uses for each entry,
//! which are also the class names of the desktop application's pet model.

use std::fmt;
use std::str::FromStr;

use crate::errors::RecordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Rodent,
    Dog,
    Cat,
    Bird,
    Fish,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Rodent,
        Category::Dog,
        Category::Cat,
        Category::Bird,
        Category::Fish,
    ];

    /// Convert category to its tag name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Rodent => "Rodent",
            Category::Dog => "Dog",
            Category::Cat => "Cat",
            Category::Bird => "Bird",
            Category::Fish => "Fish",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = RecordError;

    /// Tag names are matched exactly; XML element names are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| RecordError::UnknownCategory(s.to_string()))
    }
}
