/// Convenience result type used across goalpaper.
pub type GoalpaperResult<T> = Result<T, GoalpaperError>;

/// Top-level error taxonomy.
///
/// Every variant is reported as a single "render failure" at the HTTP boundary; the variants only
/// exist so logs and callers can tell bad input apart from raster or encoder trouble.
#[derive(thiserror::Error, Debug)]
pub enum GoalpaperError {
    /// Invalid user-provided parameters (dates, dimensions, colors, scale).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while drawing onto the raster.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the finished raster.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GoalpaperError {
    /// Build a [`GoalpaperError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GoalpaperError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GoalpaperError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
