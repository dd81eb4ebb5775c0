//! chain-pipeline - the linear prompt → model → text pipeline.

pub mod error;
pub mod pipeline;
pub mod templates;

pub use error::PipelineError;
pub use pipeline::TextPipeline;
pub use templates::{qa_template, translation_template};
