pub mod models;
pub mod sink;
pub mod source;

// Re-export commonly used types
pub use models::*;
pub use sink::{ConfigSink, SinkError};
pub use source::{DeclarationId, DeclarationSet, Enclosing, HintSource};
