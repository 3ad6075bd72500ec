use crate::demo::{run_demo, run_verify, DemoArgs, VerifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ivtc_campus::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "IVTC Campus Portal",
    about = "Run the IVTC campus portal backend and its demo flows from the command line",
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
    /// Look up a certificate reference against the seeded demo registry
    Verify(VerifyArgs),
    /// Run an end-to-end CLI demo covering verification and registration
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
        Command::Verify(args) => run_verify(args),
        Command::Demo(args) => run_demo(args),
    }
}
