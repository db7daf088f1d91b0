pub mod input;
pub mod runner;

pub use runner::{LookupRunner, RunSummary};

use crate::adapters::inat::InatClient;
use crate::config::{Overrides, Settings, TomlConfig};
use crate::core::resolver::Resolver;
use crate::domain::model::OutputMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::Path;

/// What a single invocation asks for, independent of how it was parsed.
#[derive(Debug, Clone, Default)]
pub struct RunRequest<'a> {
    pub mo_numbers: &'a [String],
    pub file: Option<&'a Path>,
    pub config_file: Option<&'a Path>,
    pub overrides: Overrides,
    pub mode: OutputMode,
}

#[cfg(feature = "cli")]
impl<'a> From<&'a crate::config::CliConfig> for RunRequest<'a> {
    fn from(cli: &'a crate::config::CliConfig) -> Self {
        Self {
            mo_numbers: &cli.mo_numbers,
            file: cli.file.as_deref(),
            config_file: cli.config.as_deref(),
            overrides: cli.overrides(),
            mode: cli.output_mode(),
        }
    }
}

/// Load settings, validate the input, then look every number up against the
/// iNaturalist API. Results go to `out`, warnings about skipped input to `diag`.
pub async fn run<W: Write, E: Write>(
    request: RunRequest<'_>,
    out: &mut W,
    diag: &mut E,
) -> Result<RunSummary> {
    let file_config = request.config_file.map(TomlConfig::from_file).transpose()?;
    let settings = Settings::resolve(file_config, request.overrides);
    settings.validate()?;
    tracing::debug!("Settings: {:?}", settings);

    let numbers = input::prepare_numbers(request.mo_numbers, request.file, diag)?;

    let client = InatClient::new(settings.api_endpoint, &settings.user_agent)?;
    let resolver = Resolver::with_mo_host(client, settings.mo_host);
    let runner = LookupRunner::new(resolver, request.mode);

    runner.run(&numbers, out).await
}
