//! Paragraph-level subsection analysis.

mod subsection;

pub use subsection::{RelevancePolicy, SubsectionAnalyzer, SubsectionOptions};
