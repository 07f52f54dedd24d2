use std::path::PathBuf;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Install the resolved-dependencies init script into ~/.gradle/init.d
    InitScript,
    /// Run a Gradle executable and report its result
    Execute {
        /// Project root the build runs in, defaults to the current directory
        #[clap(short, long)]
        root: Option<PathBuf>,
        /// Print the build result as JSON once the build finishes
        #[clap(long)]
        json: bool,
        executable: String,
        #[clap(trailing_var_arg = true, allow_hyphen_values = true)]
        arguments: Vec<String>,
    },
}
