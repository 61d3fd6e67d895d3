/// Convenience result type used across scrolla.
pub type ScrollaResult<T> = Result<T, ScrollaError>;

/// Top-level error taxonomy for the operations around the (total) palette core.
#[derive(thiserror::Error, Debug)]
pub enum ScrollaError {
    /// Invalid user-provided parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Atom content that cannot be resolved into a typed variant.
    #[error("content error: {0}")]
    Content(String),

    /// Errors while parsing or rasterizing generated SVG.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollaError {
    /// Build a [`ScrollaError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollaError::Content`] value.
    pub fn content(msg: impl Into<String>) -> Self {
        Self::Content(msg.into())
    }

    /// Build a [`ScrollaError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ScrollaError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
