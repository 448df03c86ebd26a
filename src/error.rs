//! Error handling for the shadow system
//!
//! Only recoverable conditions are represented here. Integration bugs
//! (non-triangle topology, double free, unknown ids) panic at the call site.

use std::path::Path;

/// Main error type for the shadow system
#[derive(Debug, thiserror::Error)]
pub enum ShadowError {
    #[error("Unable to allocate shadow map slot: all {max_slots} slots are held")]
    SlotsExhausted { max_slots: u32 },

    #[error("Invalid config value {field}={value}: {reason}")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO error at {path}: {error}")]
    Io { path: String, error: String },
}

/// Type alias for Results in the shadow system
pub type ShadowResult<T> = Result<T, ShadowError>;

/// Build an IO error tagged with the file it came from
pub fn io_error(path: &Path, error: std::io::Error) -> ShadowError {
    ShadowError::Io {
        path: path.display().to_string(),
        error: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShadowError::SlotsExhausted { max_slots: 64 };
        assert_eq!(
            err.to_string(),
            "Unable to allocate shadow map slot: all 64 slots are held"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let err = io_error(
            Path::new("shadow.toml"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(err.to_string(), "IO error at shadow.toml: file not found");
    }

    #[test]
    fn test_invalid_config_display() {
        let err = ShadowError::InvalidConfig {
            field: "max_emitter_slots".to_string(),
            value: "0".to_string(),
            reason: "must be in 1..=64".to_string(),
        };
        assert!(err.to_string().contains("max_emitter_slots=0"));
    }
}
