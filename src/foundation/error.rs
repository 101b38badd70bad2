/// Convenience result type used across catvid.
pub type CatvidResult<T> = Result<T, CatvidError>;

/// Top-level error taxonomy used by the animator.
#[derive(thiserror::Error, Debug)]
pub enum CatvidError {
    /// Invalid configuration or caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while drawing a frame onto the raster surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding or decoding frame images.
    #[error("encode error: {0}")]
    Encode(String),

    /// Frame synthesis aborted; the only error surfaced to the page.
    #[error("Failed to generate cat video")]
    GenerationFailed,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CatvidError {
    /// Build a [`CatvidError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CatvidError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CatvidError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
