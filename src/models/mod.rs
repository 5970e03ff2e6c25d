//! Core domain types shared by the catalog, cache, style engine and orchestrator

pub mod acquisition;
pub mod category;
pub mod content_hash;

pub use acquisition::{Acquisition, Tier};
pub use category::Category;
pub use content_hash::ContentHash;
