use clap::Parser;
use motoinat::utils::logger;
use motoinat::{CliConfig, RunRequest};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.debug);
    tracing::debug!("CLI config: {:?}", config);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    match motoinat::run(RunRequest::from(&config), &mut stdout, &mut stderr).await {
        Ok(summary) => {
            tracing::debug!(
                "Done: {} looked up, {} found",
                summary.looked_up,
                summary.found
            );
        }
        Err(e) => {
            tracing::debug!("Run failed: {} (category: {:?})", e, e.category());
            eprintln!("{}", e.user_friendly_message());
            eprintln!("{}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
