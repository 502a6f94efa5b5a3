//! Pipeline options and the depth policy.

use crate::analyze::{RelevancePolicy, SubsectionOptions};
use crate::rank::ScoreOptions;

/// Named depth presets.
///
/// One pipeline, parameterized: a deeper setting considers more pages and
/// paragraphs and carries tables/images through; a shallower one trims the
/// work without changing any of the pipeline's semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Depth {
    /// Minimum work: first page, one paragraph per section, no
    /// table/image pass-through
    Instant,
    /// First five pages, default paragraph cap, no table/image
    /// pass-through
    Fast,
    /// All pages, default paragraph cap, tables and images included
    #[default]
    Standard,
}

/// Options controlling a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// Maximum number of pages considered (`None` = all)
    pub max_pages: Option<usize>,

    /// Whether extractor-supplied tables are carried into the result
    pub include_tables: bool,

    /// Whether extractor-supplied images are carried into the result
    pub include_images: bool,

    /// Character budget for the truncated full text in the result
    pub content_budget: usize,

    /// Scoring options
    pub scoring: ScoreOptions,

    /// Subsection analysis options
    pub subsection: SubsectionOptions,
}

impl PipelineOptions {
    /// Create options with defaults (the [`Depth::Standard`] preset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a named depth preset.
    pub fn with_depth(depth: Depth) -> Self {
        Self::default().apply_depth(depth)
    }

    /// Apply a depth preset onto these options.
    ///
    /// Only the depth-controlled fields change (page limit, table/image
    /// pass-through, and for [`Depth::Instant`] the paragraph cap);
    /// scoring, content budget and the remaining subsection options keep
    /// their current values.
    pub fn apply_depth(mut self, depth: Depth) -> Self {
        match depth {
            Depth::Instant => {
                self.max_pages = Some(1);
                self.include_tables = false;
                self.include_images = false;
                self.subsection = self.subsection.with_max_paragraphs(1);
            }
            Depth::Fast => {
                self.max_pages = Some(5);
                self.include_tables = false;
                self.include_images = false;
            }
            Depth::Standard => {
                self.max_pages = None;
                self.include_tables = true;
                self.include_images = true;
            }
        }
        self
    }

    /// Set the page limit.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Enable or disable table pass-through.
    pub fn with_tables(mut self, include: bool) -> Self {
        self.include_tables = include;
        self
    }

    /// Enable or disable image pass-through.
    pub fn with_images(mut self, include: bool) -> Self {
        self.include_images = include;
        self
    }

    /// Set the truncated-content character budget.
    pub fn with_content_budget(mut self, budget: usize) -> Self {
        self.content_budget = budget;
        self
    }

    /// Enable or disable the section length bonus.
    pub fn with_length_bonus(mut self, enabled: bool) -> Self {
        self.scoring = self.scoring.with_length_bonus(enabled);
        self
    }

    /// Set the subsection relevance policy.
    pub fn with_relevance_policy(mut self, policy: RelevancePolicy) -> Self {
        self.subsection = self.subsection.with_policy(policy);
        self
    }

    /// Set subsection options wholesale.
    pub fn with_subsection_options(mut self, options: SubsectionOptions) -> Self {
        self.subsection = options;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_pages: None,
            include_tables: true,
            include_images: true,
            content_budget: 5000,
            scoring: ScoreOptions::default(),
            subsection: SubsectionOptions::default(),
        }
    }
}
