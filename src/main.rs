use clap::Parser;
use poetrydb_provider::utils::logger;
use poetrydb_provider::{CliConfig, Diagnostic, PoetryProvider};

const PROVIDER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting poetrydb-provider {}", PROVIDER_VERSION);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match cli.provider_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", Diagnostic::from(e));
            std::process::exit(1);
        }
    };

    let provider = match PoetryProvider::new(PROVIDER_VERSION, config) {
        Ok(provider) => provider,
        Err(e) => {
            eprintln!("❌ {}", Diagnostic::from(e));
            std::process::exit(1);
        }
    };

    match provider.read_with_diagnostics(&cli.title).await {
        Ok(envelope) => {
            tracing::info!("✅ Lookup completed with {} poem(s)", envelope.poems.len());
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Err(diag) => {
            tracing::error!("❌ Lookup failed: {}", diag);
            eprintln!("❌ {}", diag);
            std::process::exit(1);
        }
    }

    Ok(())
}
