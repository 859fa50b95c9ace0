use crate::demo::{run_demo, DemoArgs};
use crate::reports::{run_assess, run_policy, run_villages, AssessArgs, PolicyArgs, VillagesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fra_dss::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "FRA Decision Support",
    about = "Assess FRA holder scheme eligibility and plan village interventions",
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
    /// Assess scheme eligibility for every holder in a CSV export
    Assess(AssessArgs),
    /// Rank infrastructure interventions for every village in a CSV export
    Villages(VillagesArgs),
    /// Build a policy report from village and holder CSV exports
    Policy(PolicyArgs),
    /// Walk through the engine with built-in sample records
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
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Villages(args) => run_villages(args),
        Command::Policy(args) => run_policy(args),
        Command::Demo(args) => run_demo(args),
    }
}
