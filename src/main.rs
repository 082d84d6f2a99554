use clap::Parser;
use student_roster::utils::{logger, validation::Validate};
use student_roster::{CliConfig, FileSource, RosterService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting student-roster server");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let source = FileSource::new(&config.database);
    let service = RosterService::new(source);

    student_roster::serve(service, config.port).await?;

    Ok(())
}
