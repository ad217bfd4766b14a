use clap::Parser;

#[derive(Parser)]
#[command(name = "getgo")]
#[command(about = "Download and install the Go toolchain on Linux")]
pub struct Cli {
    /// Go version to install (e.g. 1.22.0)
    #[arg(short = 'v', long = "version")]
    pub version: Option<String>,

    /// List the available versions and pick one interactively
    #[arg(long)]
    pub versions: bool,

    /// Increase verbosity (use multiple times for more detail)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Reduce output to errors only
    #[arg(short, long)]
    pub quiet: bool,
}
