//! Provider configuration — forwarded opaquely to the type checker.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when parsing a provider configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration handed to the type-checking provider when building a
/// program.
///
/// tydoc does not interpret any of these fields; they pass straight through
/// to the provider's compiler front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ProviderConfig {
    /// Language/version target for the checked program.
    pub target: ScriptTarget,

    /// Module resolution kind.
    pub module: ModuleKind,

    /// Whether the provider should check under its strict mode.
    pub strict: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            target: ScriptTarget::Es5,
            module: ModuleKind::CommonJs,
            strict: false,
        }
    }
}

impl ProviderConfig {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not valid TOML or contains unknown
    /// fields.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }
}

/// Language/version target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptTarget {
    Es5,
    Es2015,
    Es2020,
    EsNext,
}

impl ScriptTarget {
    /// String form of the target, as providers usually spell it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Es5 => "es5",
            Self::Es2015 => "es2015",
            Self::Es2020 => "es2020",
            Self::EsNext => "esnext",
        }
    }
}

impl std::fmt::Display for ScriptTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Module resolution kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    CommonJs,
    Es2015,
    EsNext,
    NodeNext,
}

impl ModuleKind {
    /// String form of the module kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CommonJs => "commonjs",
            Self::Es2015 => "es2015",
            Self::EsNext => "esnext",
            Self::NodeNext => "nodenext",
        }
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ProviderConfig::default();
        assert_eq!(config.target, ScriptTarget::Es5);
        assert_eq!(config.module, ModuleKind::CommonJs);
        assert!(!config.strict);
    }

    #[test]
    fn parse_full_config() {
        let config = ProviderConfig::from_toml_str(
            r#"
            target = "es2020"
            module = "nodenext"
            strict = true
            "#,
        )
        .unwrap();
        assert_eq!(config.target, ScriptTarget::Es2020);
        assert_eq!(config.module, ModuleKind::NodeNext);
        assert!(config.strict);
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let config = ProviderConfig::from_toml_str("strict = true").unwrap();
        assert_eq!(config.target, ScriptTarget::Es5);
        assert_eq!(config.module, ModuleKind::CommonJs);
        assert!(config.strict);
    }

    #[test]
    fn unknown_field_rejected() {
        let result = ProviderConfig::from_toml_str("languageVersion = \"es5\"");
        assert!(result.is_err());
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ProviderConfig {
            target: ScriptTarget::EsNext,
            module: ModuleKind::EsNext,
            strict: true,
        };
        let text = toml::to_string(&config).unwrap();
        let parsed = ProviderConfig::from_toml_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn target_display() {
        assert_eq!(ScriptTarget::Es5.to_string(), "es5");
        assert_eq!(ModuleKind::CommonJs.to_string(), "commonjs");
    }
}
