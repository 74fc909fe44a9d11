//! npm registry documents and how they reach the tool
//!
//! - **document**: The registry response model (`dist-tags`, `versions`, `time`)
//! - **store**: Source/cache collaborator traits and the read-through store

pub mod document;
pub mod store;
