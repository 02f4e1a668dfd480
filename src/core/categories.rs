//! Keyword categorization
//!
//! A category is a name plus a list of keywords. A record belongs to the first
//! category that has a keyword contained in its description, ignoring case.

use crate::types::{OperationsError, Transaction};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A named set of description keywords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Name shown in the report
    pub name: String,

    /// Lowercased keywords
    pub keywords: Vec<String>,
}

impl Category {
    /// Create a category; keywords are lowercased and blanks dropped
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.trim().to_string(),
            keywords: keywords
                .iter()
                .map(|keyword| keyword.trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        }
    }

    /// Whether `description` contains any of the keywords
    pub fn matches(&self, description: &str) -> bool {
        let description = description.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| description.contains(keyword.as_str()))
    }
}

impl FromStr for Category {
    type Err = OperationsError;

    /// Parse `NAME=keyword1,keyword2`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, keywords) = s
            .split_once('=')
            .ok_or_else(|| OperationsError::invalid_category(s))?;
        let keywords: Vec<&str> = keywords.split(',').collect();
        let category = Category::new(name, &keywords);

        if category.name.is_empty() || category.keywords.is_empty() {
            return Err(OperationsError::invalid_category(s));
        }
        Ok(category)
    }
}

/// Count records per category
///
/// # Arguments
///
/// * `records` - Records to classify
/// * `categories` - Categories in priority order
///
/// # Returns
///
/// Category name to record count. Categories without matches are absent;
/// records without a description or without a matching category are not
/// counted.
pub fn categorize(records: &[Transaction], categories: &[Category]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();

    for description in records.iter().filter_map(|t| t.description.as_deref()) {
        if let Some(category) = categories.iter().find(|c| c.matches(description)) {
            *counts.entry(category.name.clone()).or_insert(0) += 1;
        }
    }

    counts
}
