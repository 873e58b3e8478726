//! Rendering of collected entries.

/// Output presenters for collected entries.
pub mod presenter;
/// Pluggable per-entry styling strategies.
pub mod style;
