use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

/// Book catalog served as a JSON API and as HTML pages.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Seed file (overrides --seed)
    #[arg(value_name = "SEED")]
    pub seed_path: Option<PathBuf>,

    /// JSON array of books loaded at startup
    #[arg(long, env = "LIVRES_SEED", default_value = "data/livres.json")]
    pub seed: PathBuf,

    /// Address to bind
    #[arg(long, env = "LIVRES_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "LIVRES_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory served under /static
    #[arg(long, env = "LIVRES_STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,
}

impl Config {
    /// The positional seed path wins over the flag.
    pub fn seed_file(&self) -> &PathBuf {
        self.seed_path.as_ref().unwrap_or(&self.seed)
    }
}
