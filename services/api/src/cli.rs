use crate::demo::{run_lead_import, run_lead_score, LeadImportArgs, LeadScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_insight::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Lead Insight",
    about = "Score sales leads, guess contact emails, and draft outreach",
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
    /// Score individual leads or CRM exports from the command line
    Lead {
        #[command(subcommand)]
        command: LeadCommand,
    },
}

#[derive(Subcommand, Debug)]
enum LeadCommand {
    /// Score a single lead and print the rationale and outreach draft
    Score(LeadScoreArgs),
    /// Score every row of a CSV lead export
    Import(LeadImportArgs),
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
        Command::Lead {
            command: LeadCommand::Score(args),
        } => {
            run_lead_score(args);
            Ok(())
        }
        Command::Lead {
            command: LeadCommand::Import(args),
        } => run_lead_import(args),
    }
}
