/// Convenience result type used across skinweave.
pub type SkinResult<T> = Result<T, SkinError>;

/// Top-level error taxonomy used by engine setup APIs.
///
/// The paint path never surfaces these: missing specs or elements degrade to an unstyled
/// region instead.
#[derive(thiserror::Error, Debug)]
pub enum SkinError {
    /// Invalid caller-provided data (dimensions, percentages, buffer lengths).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing elements, text or surfaces.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while installing or building a theme.
    #[error("theme error: {0}")]
    Theme(String),

    /// Errors when serializing or deserializing spec tables and options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkinError {
    /// Build a [`SkinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SkinError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SkinError::Theme`] value.
    pub fn theme(msg: impl Into<String>) -> Self {
        Self::Theme(msg.into())
    }

    /// Build a [`SkinError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SkinError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
