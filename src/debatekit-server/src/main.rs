//! DebateKit server binary.
//!
//! Serves debate-material generation over HTTP using an OpenAI-compatible or
//! local Ollama backend.

use std::path::PathBuf;

use clap::Parser;
use debatekit_core::Config;

#[derive(Parser)]
#[command(
    name = "debatekit",
    version,
    about = "Debate argument generator API",
    long_about = "Turns bill text into Congressional Debate argument packages, speeches and edits via an LLM provider."
)]
struct Cli {
    /// Address to listen on (overrides DEBATEKIT_ADDR and the config file)
    #[arg(long, value_name = "ADDR")]
    addr: Option<String>,

    /// Read settings from a TOML file instead of the environment
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let mut config = Config::load(path)?;
            // Keep the credential out of the file when possible
            if config.openai.api_key.is_none() {
                config.openai.api_key = std::env::var("OPENAI_API_KEY")
                    .ok()
                    .filter(|k| !k.trim().is_empty());
            }
            config
        }
        None => Config::from_env(),
    };
    if let Some(addr) = cli.addr {
        config.server.addr = addr;
    }

    debatekit_server::run(config).await
}
