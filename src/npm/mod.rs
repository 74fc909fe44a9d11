//! npm-side metadata models
//!
//! - **package**: Minimal package.json structure
//! - **component**: Component story parameters (packageJson, version fallback,
//!   ignored tags, deprecation status)

pub mod component;
pub mod package;
