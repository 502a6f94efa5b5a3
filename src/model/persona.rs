//! Persona and job types driving relevance ranking.

use serde::{Deserialize, Serialize};

use crate::rank::keywords_for;

/// A named consumer role with its interest keywords.
///
/// Keywords are stored lowercase; matching against document text is a
/// case-insensitive substring membership test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaProfile {
    /// Role name, e.g. "Food Contractor"
    pub role: String,

    /// Interest keywords (lowercase)
    pub keywords: Vec<String>,
}

impl PersonaProfile {
    /// Build a profile for a role name using the built-in keyword table.
    ///
    /// Unknown roles get an empty keyword set, which scores neutrally
    /// rather than failing.
    pub fn named(role: impl Into<String>) -> Self {
        let role = role.into();
        let keywords = keywords_for(&role)
            .iter()
            .map(|k| k.to_string())
            .collect();
        Self { role, keywords }
    }

    /// Build a profile with an explicit keyword set.
    pub fn with_keywords(role: impl Into<String>, keywords: Vec<String>) -> Self {
        Self {
            role: role.into(),
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Number of keywords found in the given lowercased text.
    ///
    /// Each keyword counts at most once regardless of occurrences.
    pub fn hits_in(&self, lower_text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| lower_text.contains(k.as_str()))
            .count()
    }
}

/// A free-text description of the task the persona wants to accomplish.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    /// Task description, e.g. "Plan vegetarian lunch menu"
    pub task: String,
}

impl JobSpec {
    /// Create a job spec from a task description.
    pub fn new(task: impl Into<String>) -> Self {
        Self { task: task.into() }
    }

    /// Derived job tokens: whitespace-split lowercased words longer than
    /// 3 characters, deduplicated.
    pub fn tokens(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self
            .task
            .to_lowercase()
            .split_whitespace()
            .filter(|w| w.chars().count() > 3)
            .map(|w| w.to_string())
            .collect();
        tokens.sort();
        tokens.dedup();
        tokens
    }
}
