use crate::config::Overrides;
use crate::domain::model::OutputMode;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "motoinat", version)]
#[command(about = "Find iNaturalist observations for Mushroom Observer numbers")]
pub struct CliConfig {
    /// One or more Mushroom Observer numbers
    pub mo_numbers: Vec<String>,

    /// File containing Mushroom Observer numbers, one per line
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long, help = "Enable debug output")]
    pub debug: bool,

    #[arg(long, help = "Output only the iNaturalist URL")]
    pub url: bool,

    #[arg(short = 'q', help = "Output only the iNaturalist observation number")]
    pub quiet: bool,

    /// TOML file with [api] and [lookup] settings
    #[arg(long, env = "MOTOINAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// iNaturalist observations endpoint
    #[arg(long, env = "MOTOINAT_API_ENDPOINT")]
    pub api_endpoint: Option<String>,

    /// User-Agent header sent to the iNaturalist API
    #[arg(long, env = "MOTOINAT_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Mushroom Observer host used to build the candidate URLs
    #[arg(long, env = "MOTOINAT_MO_HOST")]
    pub mo_host: Option<String>,
}

impl CliConfig {
    pub fn output_mode(&self) -> OutputMode {
        OutputMode::from_flags(self.url, self.quiet)
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_endpoint: self.api_endpoint.clone(),
            user_agent: self.user_agent.clone(),
            mo_host: self.mo_host.clone(),
        }
    }
}
