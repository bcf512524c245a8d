use crate::demo::{print_questions, run_demo, run_profile, DemoArgs, ProfileArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use risk_profiler::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Client Risk Profiler",
    about = "Score client risk questionnaires and export adviser file notes",
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
    /// Score a questionnaire saved as JSON and print the result
    Profile(ProfileArgs),
    /// List the attitude statements and capacity questions with their answer options
    Questions,
    /// Score a sample client end to end and print the file note
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
        Command::Profile(args) => run_profile(args),
        Command::Questions => {
            print_questions();
            Ok(())
        }
        Command::Demo(args) => run_demo(args),
    }
}
