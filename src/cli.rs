use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Roster export with First Name, Last Name, Theme, Rank columns
    #[arg(long, default_value = "themes.csv")]
    pub input: PathBuf,

    /// Directory for chart and report artifacts
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Path to config TOML
    #[arg(long, default_value = "starburst.toml")]
    pub config: PathBuf,
}
