pub mod document_cache;
pub mod types;

pub use document_cache::DocumentCache;
pub use types::{CacheEntry, CacheStats};
