//! The analysis pipeline: options, run configuration, assembly, and the
//! per-document driver.

mod assemble;
mod config;
mod options;
#[allow(clippy::module_inception)]
mod pipeline;

pub use assemble::ResultAssembler;
pub use config::{JobDescriptor, PersonaDescriptor, RunConfig, DEFAULT_JOB, DEFAULT_PERSONA};
pub use options::{Depth, PipelineOptions};
pub use pipeline::Pipeline;
