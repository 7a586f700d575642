//! Validate, persist, and fetch records through one generic pipeline.

mod pipeline;
mod resource;
mod validation;
pub use pipeline::ResourcePipeline;
pub use resource::{parse_id, ResourceStore};
pub use validation::RequestValidator;
