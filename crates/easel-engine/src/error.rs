use thiserror::Error;

/// Errors surfaced by engine loaders and game settings.
///
/// The game loop itself never fails: numeric state is clamped instead of
/// rejected. These only come out of JSON supplied by the host page.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid asset manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("invalid settings: {0}")]
    Settings(#[source] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSetting { field: &'static str, reason: String },
}

impl EngineError {
    /// Shorthand for a settings validation failure.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            field,
            reason: reason.into(),
        }
    }
}
