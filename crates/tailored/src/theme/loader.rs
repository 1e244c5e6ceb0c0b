//! Loading themes from YAML and JSON.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use super::theme::Theme;

/// Error returned when a theme cannot be loaded or fails validation.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported theme file {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid spacing scale: {reason}")]
    InvalidSpacing { reason: String },
    #[error("breakpoints must be non-negative and ascending from xs to xl")]
    BreakpointOrder,
}

impl Theme {
    /// Parses a YAML theme. Missing fields keep their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tailored::Theme;
    ///
    /// let theme = Theme::from_yaml("spacing: 4\nshape:\n  borderRadius: 8px\n").unwrap();
    /// assert_eq!(theme.spacing(2.0).to_string(), "8px");
    /// assert_eq!(theme.shape().border_radius.to_string(), "8px");
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_yaml::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parses a JSON theme. Missing fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let theme: Theme = serde_json::from_str(source)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Reads a theme file, choosing the format by extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let read = || {
            fs::read_to_string(path).map_err(|source| ThemeError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        debug!("loading theme from {}", path.display());
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Theme::from_yaml(&read()?),
            Some("json") => Theme::from_json(&read()?),
            _ => Err(ThemeError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Serializes the theme, including every default, as YAML.
    pub fn to_yaml(&self) -> Result<String, ThemeError> {
        Ok(serde_yaml::to_string(self)?)
    }
}
