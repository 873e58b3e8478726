//! Infrastructure adapters for filesystem access.

/// Directory listing and metadata query boundary.
pub mod fs;
