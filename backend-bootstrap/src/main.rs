use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use backend_bootstrap::{init_logging, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "wintercraft-backend")]
#[command(about = "WinterCraft donation and site backend", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,

    /// Console log format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Also write daily-rotated log files to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = init_logging(args.log_format, args.log_dir.as_deref())?;

    backend_bootstrap::run_standalone(args.config.as_deref()).await
}
