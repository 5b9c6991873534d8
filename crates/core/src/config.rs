use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `SCREENBOOK__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Currency label applied when formatting amounts. Pricing itself is
    /// currency-agnostic.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Optional path to a JSON catalog snapshot. When unset, the built-in
    /// demo screens are used.
    #[serde(default)]
    pub source_path: Option<String>,
}

fn default_currency() -> String {
    "KWD".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("SCREENBOOK")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
