//! Persona keyword model and relevance ranking.

mod keywords;
mod scorer;

pub use keywords::keywords_for;
pub use scorer::{RelevanceScorer, ScoreOptions};
