//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete.

/// Autocomplete handlers for claim ids, statuses and listing filter values
pub mod autocomplete;
