use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "gradle-action")]
#[clap(about = "Runs Gradle in CI, captures the build scan URL and publishes resolved dependencies", long_about = None)]
pub struct Cli {
    /// Config file, defaults to ~/.gradle-action/config.toml
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Home directory holding .gradle, defaults to the current user's home
    #[clap(long, global = true)]
    pub home: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
