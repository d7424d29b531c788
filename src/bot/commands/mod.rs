//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Claim management commands
pub mod claim;

/// Contact directory commands
pub mod contact;

/// Dashboard section commands
pub mod dashboard;

/// General utility commands
pub mod general;

// Export commands
pub use claim::*;
pub use contact::*;
pub use dashboard::*;
pub use general::*;
