mod error;
mod filter;
mod variant;

pub use error::{Error, Result};
pub use filter::{Page, SearchFilter, SearchQuery, Setting};
pub use variant::EmbeddingVariant;
