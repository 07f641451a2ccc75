// Copyright (c) 2025 GrillCheese Script Team
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Server Configuration
//!
//! Settings for the GrillCheese Script language server: the file
//! extensions involved in compilation and the external tool locations
//! the command handlers hand to the toolchain layer.
//!
//! Configuration arrives through the client's settings payload:
//!
//! ```json
//! {
//!   "grillcheese": {
//!     "targetExtension": "lua",
//!     "loveExecutable": "love",
//!     "compilerEntrypoint": "gcscript/init.lua"
//!   }
//! }
//! ```

use serde_json::Value;

/// Main server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Extension of GrillCheese source files (without the dot)
    pub source_extension: String,

    /// Extension of compiled output files (without the dot)
    pub target_extension: String,

    /// Love2D runtime executable
    pub love_executable: String,

    /// Entry point script of the GrillCheese compiler
    pub compiler_entrypoint: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            source_extension: "gcs".to_string(),
            target_extension: "lua".to_string(),
            love_executable: "love".to_string(),
            compiler_entrypoint: "gcscript/init.lua".to_string(),
        }
    }
}

impl ServerConfig {
    /// Parse server config from an LSP client settings payload
    ///
    /// Missing keys fall back to their defaults; a payload without a
    /// `grillcheese` section yields `None` so the caller keeps the
    /// current configuration.
    pub fn from_lsp_settings(settings: &Value) -> Option<Self> {
        let section = settings.get("grillcheese")?;
        let defaults = Self::default();

        let get = |key: &str, fallback: String| {
            section
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Some(Self {
            source_extension: get("sourceExtension", defaults.source_extension),
            target_extension: get("targetExtension", defaults.target_extension),
            love_executable: get("loveExecutable", defaults.love_executable),
            compiler_entrypoint: get("compilerEntrypoint", defaults.compiler_entrypoint),
        })
    }

    /// Validate the configuration
    ///
    /// Extensions must be non-empty and written without a leading dot;
    /// tool locations must be non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("sourceExtension", &self.source_extension),
            ("targetExtension", &self.target_extension),
        ] {
            if value.is_empty() {
                return Err(ConfigError::EmptyField(name.to_string()));
            }
            if value.starts_with('.') {
                return Err(ConfigError::InvalidExtension {
                    field: name.to_string(),
                    reason: "write extensions without the leading dot".to_string(),
                });
            }
        }

        if self.love_executable.is_empty() {
            return Err(ConfigError::EmptyField("loveExecutable".to_string()));
        }
        if self.compiler_entrypoint.is_empty() {
            return Err(ConfigError::EmptyField("compilerEntrypoint".to_string()));
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is empty
    #[error("Configuration field '{0}' must not be empty")]
    EmptyField(String),

    /// An extension is malformed
    #[error("Invalid extension in '{field}': {reason}")]
    InvalidExtension { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.source_extension, "gcs");
        assert_eq!(config.target_extension, "lua");
    }

    #[test]
    fn test_from_lsp_settings_full() {
        let settings = json!({
            "grillcheese": {
                "targetExtension": "luac",
                "loveExecutable": "/opt/love/love",
                "compilerEntrypoint": "compiler/main.lua"
            }
        });

        let config = ServerConfig::from_lsp_settings(&settings).unwrap();
        assert_eq!(config.target_extension, "luac");
        assert_eq!(config.love_executable, "/opt/love/love");
        assert_eq!(config.compiler_entrypoint, "compiler/main.lua");
        // Unspecified keys keep their defaults
        assert_eq!(config.source_extension, "gcs");
    }

    #[test]
    fn test_from_lsp_settings_missing_section() {
        let settings = json!({ "otherExtension": {} });
        assert!(ServerConfig::from_lsp_settings(&settings).is_none());
    }

    #[test]
    fn test_validate_rejects_dotted_extension() {
        let config = ServerConfig {
            target_extension: ".lua".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_tool() {
        let config = ServerConfig {
            love_executable: String::new(),
            ..Default::default()
        };

        assert!(matches!(config.validate(), Err(ConfigError::EmptyField(_))));
    }
}
