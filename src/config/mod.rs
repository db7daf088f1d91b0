#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::inat::DEFAULT_API_ENDPOINT;
use crate::core::candidates::DEFAULT_MO_HOST;
use crate::utils::error::Result;
use crate::utils::validation::{validate_host, validate_non_empty_string, validate_url, Validate};

pub fn default_user_agent() -> String {
    format!("motoinat/{}", env!("CARGO_PKG_VERSION"))
}

/// Values set on the command line or through the environment. They win over
/// the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_endpoint: Option<String>,
    pub user_agent: Option<String>,
    pub mo_host: Option<String>,
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_endpoint: String,
    pub user_agent: String,
    pub mo_host: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            user_agent: default_user_agent(),
            mo_host: DEFAULT_MO_HOST.to_string(),
        }
    }
}

impl Settings {
    /// Layer overrides over the (optional) file over the defaults.
    pub fn resolve(file: Option<TomlConfig>, overrides: Overrides) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            api_endpoint: overrides
                .api_endpoint
                .or(file.api.endpoint)
                .unwrap_or(defaults.api_endpoint),
            user_agent: overrides
                .user_agent
                .or(file.api.user_agent)
                .unwrap_or(defaults.user_agent),
            mo_host: overrides
                .mo_host
                .or(file.lookup.mo_host)
                .unwrap_or(defaults.mo_host),
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", &self.api_endpoint)?;
        validate_non_empty_string("api.user_agent", &self.user_agent)?;
        validate_host("lookup.mo_host", &self.mo_host)?;
        Ok(())
    }
}
