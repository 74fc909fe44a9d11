//! Core plumbing for release-lens
//!
//! - **error**: Unified error type with contextual help messages and exit codes

pub mod error;
