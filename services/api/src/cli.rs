use crate::demo::{run_demo, run_shortlist, DemoArgs, ShortlistArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rankpath::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Rankpath Predictor",
    about = "Run the college eligibility and personalization service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print an eligibility shortlist for the given ranks
    Shortlist(ShortlistArgs),
    /// Run an end-to-end CLI demo covering both matching modes
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Load cutoffs from a CSV export instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Shortlist(args) => run_shortlist(args),
        Command::Demo(args) => run_demo(args),
    }
}
