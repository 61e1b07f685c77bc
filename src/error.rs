use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// The simulation core itself never fails; everything here happens once at
/// startup, before the first tick.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid JSON for [`crate::Settings`].
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_is_informative() {
        let e = ConfigError::InvalidParam("ball_radius must be > 0".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid parameter"));
        assert!(msg.contains("ball_radius"));
    }
}
