//! Integration test suite for release-lens
//!
//! Drives the compiled binary against fixture files on disk.

mod helpers;
mod test_details;
