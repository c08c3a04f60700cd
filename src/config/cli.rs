use crate::config::ProviderConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "poetrydb-provider")]
#[command(about = "Look up poems by title in the PoetryDB catalog")]
pub struct CliConfig {
    /// Poem title to look up
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "https://poetrydb.org")]
    pub endpoint: String,

    /// Optional TOML file overriding --endpoint
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolve provider settings, with a config file taking precedence over
    /// flags when given.
    pub fn provider_config(&self) -> crate::utils::error::Result<ProviderConfig> {
        let mut config = match &self.config {
            Some(path) => ProviderConfig::from_file(path)?,
            None => ProviderConfig::new(self.endpoint.clone()),
        };
        if config.timeout_seconds.is_none() {
            config.timeout_seconds = self.timeout_seconds;
        }
        Ok(config)
    }
}
