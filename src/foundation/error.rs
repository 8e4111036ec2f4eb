/// Convenience result type used across the collector.
pub type CollectResult<T> = Result<T, CollectError>;

/// Top-level error taxonomy used by collector APIs.
#[derive(thiserror::Error, Debug)]
pub enum CollectError {
    /// The job description carries no render-data block.
    #[error("no render data found")]
    MissingRenderData,

    /// The same product name appears in both product lists under a strict merge policy.
    #[error("duplicate render product '{name}' in primary and auxiliary outputs")]
    DuplicateProduct {
        /// Colliding product name.
        name: String,
    },

    /// Invalid job description data at the host boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CollectError {
    /// Build a [`CollectError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CollectError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
