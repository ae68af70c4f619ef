use std::path::PathBuf;

use clap::Parser;

/// Podify: summarize text and read the summary aloud
#[derive(Debug, Parser)]
#[command(name = "podify", about = "Turn text into a spoken podcast summary")]
pub struct Args {
    /// Path to configuration file; without one, keys are read from
    /// `OPENAI_API_KEY` and `ELEVENLABS_API_KEY`
    #[arg(short, long, env = "PODIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "PODIFY_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter used when the configuration does not set one
    #[arg(long, env = "PODIFY_LOG", default_value = "info")]
    pub log: String,
}
