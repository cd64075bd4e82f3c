pub mod engine;
pub mod mem;
pub mod schema;

// Re-export main types for convenience
pub use engine::BackendHandle;
pub use mem::MemBackend;
pub use schema::{Column, Schema};
