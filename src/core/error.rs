//! Error types for release-lens with contextual messages and exit codes
//!
//! This module provides a unified error type that categorizes errors and provides
//! contextual help messages to users. Missing *data* is never an error anywhere in
//! this tool (lookups degrade to absent values); these types cover the shell around
//! the core: unreadable input files and malformed JSON.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-lens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad arguments, missing or malformed input files)
  User = 1,
  /// System error (I/O)
  System = 2,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-lens
#[derive(Debug)]
pub enum LensError {
  /// Component metadata file errors
  Meta(MetaError),

  /// Registry document errors
  Registry(RegistryError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl LensError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    LensError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  #[allow(dead_code)]
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    LensError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  #[allow(dead_code)]
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      LensError::Message { message, context, help } => LensError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      LensError::Meta(_) => ExitCode::User,
      LensError::Registry(_) => ExitCode::User,
      LensError::Io(_) => ExitCode::System,
      LensError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      LensError::Meta(e) => e.help_message(),
      LensError::Registry(e) => e.help_message(),
      LensError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for LensError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      LensError::Meta(e) => write!(f, "{}", e),
      LensError::Registry(e) => write!(f, "{}", e),
      LensError::Io(e) => write!(f, "I/O error: {}", e),
      LensError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for LensError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      LensError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for LensError {
  fn from(err: io::Error) -> Self {
    LensError::Io(err)
  }
}

impl From<serde_json::Error> for LensError {
  fn from(err: serde_json::Error) -> Self {
    LensError::message(format!("JSON error: {}", err))
  }
}

impl From<String> for LensError {
  fn from(msg: String) -> Self {
    LensError::message(msg)
  }
}

impl From<&str> for LensError {
  fn from(msg: &str) -> Self {
    LensError::message(msg)
  }
}

/// Component metadata file errors
#[derive(Debug)]
pub enum MetaError {
  /// Metadata file not found
  NotFound { path: PathBuf },

  /// Metadata file is not valid JSON
  Parse { path: PathBuf, message: String },
}

impl MetaError {
  fn help_message(&self) -> Option<String> {
    match self {
      MetaError::NotFound { .. } => Some(
        "Pass --meta pointing at the component's parameters file (an object with packageJson, ignoredTags, status)."
          .to_string(),
      ),
      MetaError::Parse { .. } => None,
    }
  }
}

impl fmt::Display for MetaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MetaError::NotFound { path } => {
        write!(f, "Component metadata file not found: {}", path.display())
      }
      MetaError::Parse { path, message } => {
        write!(f, "Failed to parse component metadata {}: {}", path.display(), message)
      }
    }
  }
}

/// Registry document errors
#[derive(Debug)]
pub enum RegistryError {
  /// Registry document not found
  NotFound { path: PathBuf },

  /// Registry document is not valid JSON
  Parse { path: PathBuf, message: String },
}

impl RegistryError {
  fn help_message(&self) -> Option<String> {
    match self {
      RegistryError::NotFound { .. } => Some(
        "Capture a registry document first: `curl https://registry.npmjs.org/<package-name> > registry.json`."
          .to_string(),
      ),
      RegistryError::Parse { .. } => None,
    }
  }
}

impl fmt::Display for RegistryError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RegistryError::NotFound { path } => {
        write!(f, "Registry document not found: {}", path.display())
      }
      RegistryError::Parse { path, message } => {
        write!(f, "Failed to parse registry document {}: {}", path.display(), message)
      }
    }
  }
}

/// Result type alias for release-lens operations
pub type LensResult<T> = Result<T, LensError>;

/// Print an error with its contextual help to stderr
pub fn print_error(err: &LensError) {
  eprintln!("Error: {}", err);
  if let Some(help) = err.help_message() {
    eprintln!("\n💡 {}", help);
  }
}
