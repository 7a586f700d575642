//! HTTP handlers for resource create/fetch and the generated API document.

pub mod resource;
pub mod docs;
pub use resource::*;
pub use docs::*;
