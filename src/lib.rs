pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::inat::InatClient;
pub use app::{run, LookupRunner, RunRequest, RunSummary};
pub use config::{Overrides, Settings, TomlConfig};
pub use crate::core::{candidates::candidate_urls, resolver::Resolver};
pub use domain::model::{Lookup, LookupOutcome, MoNumber, Observation, OutputMode};
pub use domain::ports::ObservationSource;
pub use utils::error::{MotoinatError, Result};
