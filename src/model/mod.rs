//! Data model for document analysis.
//!
//! This module defines the values that flow through the pipeline: the raw
//! input document, the persona and job that drive relevance ranking, the
//! sections produced by segmentation, and the final analysis record that
//! is serialized to JSON. All entities are created fresh per input
//! document and are never mutated outside their owning pipeline stage.

mod document;
mod persona;
mod result;
mod section;

pub use document::RawDocument;
pub use persona::{JobSpec, PersonaProfile};
pub use result::{AnalysisMetadata, AnalysisResult, ImageRef, TableData};
pub use section::{RankedSection, Section, SubsectionInsight};
