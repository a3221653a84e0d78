use crate::quote::{run_companies, run_fields, run_quote, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use property_markup::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Property Mark-Up Tool",
    about = "Encode property details into pricing-template values from the command line or over HTTP",
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
    /// Compute the mark-up values for one property
    Quote(QuoteArgs),
    /// List management companies eligible for the company discount
    Companies,
    /// Show the template coordinate of every output field
    Fields,
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
        Command::Quote(args) => run_quote(args),
        Command::Companies => {
            run_companies();
            Ok(())
        }
        Command::Fields => {
            run_fields();
            Ok(())
        }
    }
}
