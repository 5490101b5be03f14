//! Expense category model
//!
//! Categories form a fixed, closed set. Every expense carries exactly one
//! category; budget tasks may optionally carry one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed classification tag for expenses and budget tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Healthcare,
    Education,
    Savings,
    Budgeting,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Food,
            Self::Transport,
            Self::Bills,
            Self::Entertainment,
            Self::Shopping,
            Self::Healthcare,
            Self::Education,
            Self::Savings,
            Self::Budgeting,
        ]
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Savings => "Savings",
            Self::Budgeting => "Budgeting",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "bills" => Ok(Self::Bills),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "healthcare" => Ok(Self::Healthcare),
            "education" => Ok(Self::Education),
            "savings" => Ok(Self::Savings),
            "budgeting" => Ok(Self::Budgeting),
            _ => Err(CategoryParseError(s.to_string())),
        }
    }
}

/// Error returned when a string does not name a known category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown category '{}'. Valid categories: {}",
            self.0,
            Category::all()
                .iter()
                .map(|c| c.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for CategoryParseError {}

/// Parse a category filter value, treating the "All Categories" sentinel
/// (and plain "all") as no filter.
pub fn parse_category_filter(s: &str) -> Result<Option<Category>, CategoryParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all categories") || trimmed.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}
