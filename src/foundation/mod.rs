//! Shared value types and the error taxonomy.

/// Frame indices, canvas, colors and geometry re-exports.
pub mod core;
/// Error type and result alias.
pub mod error;
