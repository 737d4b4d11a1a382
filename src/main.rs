use clap::Parser;
use tracing_subscriber::EnvFilter;

use starburst::cli::Args;
use starburst::config::AppConfig;
use starburst::pipeline;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config);
    pipeline::run(&args, &cfg)?;

    println!("Saved starburst artifacts to {}", args.out_dir.display());
    Ok(())
}
