//! Still-image encoding for generated frames.

/// PNG encode/decode with premultiplied-alpha conversion.
pub mod png;
