use crate::error::QuantityError;
use crate::prefix::{global, PrefixTable};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File name looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "quantity.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Rejected configured prefix: {0}")]
    Quantity(#[from] QuantityError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    // Custom prefixes, registered in file order
    #[serde(default, rename = "prefix")]
    pub prefixes: Vec<PrefixConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Prefix token used for an extra view when none is given on the command line
    #[serde(default)]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PrefixConfig {
    pub name: String,
    pub symbol: String,
    pub scale: f64,
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Register every configured prefix into `table`.
    ///
    /// Either all prefixes are registered or, on the first rejection, the
    /// table is left as it was.
    pub fn apply(&self, table: &mut PrefixTable) -> Result<(), ConfigError> {
        if self.prefixes.is_empty() {
            return Ok(());
        }
        let mut staged = table.clone();
        for entry in &self.prefixes {
            if let Err(e) = staged.register(&entry.name, &entry.symbol, entry.scale) {
                log::warn!("Config prefix '{}' rejected: {}", entry.name, e);
                return Err(e.into());
            }
        }
        log::debug!("Applied {} configured prefixes", self.prefixes.len());
        *table = staged;
        Ok(())
    }

    /// The prefix token for an extra view: the requested one, else `[display] prefix`.
    pub fn view_prefix<'a>(&'a self, requested: Option<&'a str>) -> Option<&'a str> {
        requested.or(self.display.prefix.as_deref())
    }

    /// [`Config::apply`] against the process-wide prefix table.
    pub fn apply_global(&self) -> Result<(), ConfigError> {
        global::with_table_mut(|table| self.apply(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const SAMPLE: &str = r#"
[display]
prefix = "kilo"

[[prefix]]
name = "custom"
symbol = "R"
scale = 1e30

[[prefix]]
name = "quecto"
symbol = "q"
scale = 1e-30
"#;

    #[test]
    fn test_parse_sample() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        assert_eq!(config.display.prefix.as_deref(), Some("kilo"));
        assert_eq!(config.prefixes.len(), 2);
        assert_eq!(config.prefixes[0].name, "custom");
        assert_eq!(config.prefixes[1].scale, 1e-30);
    }

    #[test]
    fn test_empty_document() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config, Config::empty());
        let mut table = PrefixTable::standard();
        let before = table.len();
        config.apply(&mut table).unwrap();
        assert_eq!(table.len(), before);
    }

    #[test]
    fn test_malformed_document() {
        let err = Config::load_from_str("[[prefix]]\nname = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_file("/nonexistent/quantity.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_apply_registers_prefixes() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        let mut table = PrefixTable::standard();
        config.apply(&mut table).unwrap();
        assert_eq!(table.resolve("custom").unwrap().scale(), 1e30);
        assert_eq!(table.resolve("q").unwrap().name(), "quecto");
    }

    #[test]
    fn test_apply_global_registers_into_shared_table() {
        let config = Config::load_from_str(
            r#"
[[prefix]]
name = "cfgglobal"
symbol = "Cgl"
scale = 1e33
"#,
        )
        .unwrap();
        config.apply_global().unwrap();
        let prefix = global::resolve("cfgglobal").unwrap();
        assert_eq!(prefix.scale(), 1e33);
        assert_eq!(global::resolve("Cgl").unwrap().name(), "cfgglobal");

        // applying again collides with the entry just registered
        assert!(matches!(
            config.apply_global().unwrap_err(),
            ConfigError::Quantity(_)
        ));
        global::unregister("cfgglobal").unwrap();
    }

    #[test]
    fn test_view_prefix_falls_back_to_display() {
        let config = Config::load_from_str(SAMPLE).unwrap();
        assert_eq!(config.view_prefix(Some("milli")), Some("milli"));
        assert_eq!(config.view_prefix(None), Some("kilo"));
        assert_eq!(Config::empty().view_prefix(None), None);
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let config = Config::load_from_str(
            r#"
[[prefix]]
name = "fresh"
symbol = "Fr"
scale = 1e40

[[prefix]]
name = "kilo2"
symbol = "k"
scale = 1e50
"#,
        )
        .unwrap();
        let mut table = PrefixTable::standard();
        let err = config.apply(&mut table).unwrap_err();
        match err {
            ConfigError::Quantity(e) => assert_eq!(e.kind(), ErrorKind::InvalidPrefix),
            other => panic!("unexpected error: {}", other),
        }
        assert!(!table.contains("fresh"));
    }
}
