//! # Configuration Module
//!
//! Application configuration loaded from an optional TOML file.
//!
//! ## File Format
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//!
//! [limits]
//! max_description_length = 16384
//! max_image_labels = 32
//! max_label_length = 256
//! ```
//!
//! Every key is optional. CLI flags override the file; server hardening
//! (CORS, rate limiting) stays in environment variables, see the `api` module.

use serde::{Deserialize, Serialize};
use std::path::Path;
use triage_core::{
    TriageError,
    primitives::{MAX_DESCRIPTION_LENGTH, MAX_IMAGE_LABELS, MAX_LABEL_LENGTH},
};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "triage.toml";

/// Maximum config file size (64 KiB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// CONFIG STRUCTURE
// =============================================================================

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub limits: RequestLimits,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Bounds applied to every report before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestLimits {
    pub max_description_length: usize,
    pub max_image_labels: usize,
    pub max_label_length: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            max_description_length: MAX_DESCRIPTION_LENGTH,
            max_image_labels: MAX_IMAGE_LABELS,
            max_label_length: MAX_LABEL_LENGTH,
        }
    }
}

impl RequestLimits {
    /// Validate a report against these limits.
    ///
    /// The engine accepts anything; this rejects reports that carry no
    /// description or would make a single request unreasonably expensive.
    pub fn check_report(&self, description: &str, image_labels: &[String]) -> Result<(), TriageError> {
        if description.trim().is_empty() {
            return Err(TriageError::InvalidReport(
                "Description is required".to_string(),
            ));
        }
        if description.len() > self.max_description_length {
            return Err(TriageError::DescriptionTooLong {
                len: description.len(),
                max: self.max_description_length,
            });
        }
        if image_labels.len() > self.max_image_labels {
            return Err(TriageError::TooManyLabels {
                count: image_labels.len(),
                max: self.max_image_labels,
            });
        }
        if let Some(label) = image_labels
            .iter()
            .find(|l| l.len() > self.max_label_length)
        {
            return Err(TriageError::InvalidReport(format!(
                "Image label length {} exceeds maximum {} bytes",
                label.len(),
                self.max_label_length
            )));
        }
        Ok(())
    }
}

// =============================================================================
// LOADING
// =============================================================================

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, TriageError> {
        toml::from_str(text).map_err(|e| TriageError::ConfigError(e.to_string()))
    }

    /// Load configuration.
    ///
    /// - `Some(path)`: the file must exist and parse.
    /// - `None`: [`DEFAULT_CONFIG_FILE`] is used if present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self, TriageError> {
        let path = match path {
            Some(p) => p,
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    tracing::debug!("No {} found, using default configuration", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let metadata = std::fs::metadata(path).map_err(|e| {
            TriageError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(TriageError::ConfigError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let text = std::fs::read_to_string(path).map_err(|e| {
            TriageError::IoError(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        let config = Self::from_toml_str(&text)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = AppConfig::from_toml_str("").expect("parse");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AppConfig::from_toml_str("[server]\nport = 9090\n").expect("parse");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.limits, RequestLimits::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = AppConfig::from_toml_str("[server]\nhots = \"0.0.0.0\"\n");
        assert!(matches!(result, Err(TriageError::ConfigError(_))));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "[limits]\nmax_image_labels = 4").expect("write");

        let config = AppConfig::load(Some(file.path())).expect("load");
        assert_eq!(config.limits.max_image_labels, 4);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/triage.toml")));
        assert!(matches!(result, Err(TriageError::IoError(_))));
    }

    #[test]
    fn blank_description_rejected() {
        let limits = RequestLimits::default();
        assert!(matches!(
            limits.check_report("   ", &[]),
            Err(TriageError::InvalidReport(_))
        ));
    }

    #[test]
    fn label_limits_enforced() {
        let limits = RequestLimits {
            max_image_labels: 1,
            ..RequestLimits::default()
        };
        let labels = vec!["fire".to_string(), "smoke".to_string()];
        assert!(matches!(
            limits.check_report("problem", &labels),
            Err(TriageError::TooManyLabels { count: 2, max: 1 })
        ));
    }

    #[test]
    fn long_description_rejected() {
        let limits = RequestLimits {
            max_description_length: 4,
            ..RequestLimits::default()
        };
        assert!(matches!(
            limits.check_report("pothole", &[]),
            Err(TriageError::DescriptionTooLong { len: 7, max: 4 })
        ));
    }
}
