use clap::{Parser, Subcommand};
use anyhow::Result;
use dotenvy::dotenv;

mod error;
mod extractor;
mod fetch;
mod lookup;
mod output;
mod scan;
mod server;
mod telemetry;

#[derive(Parser)]
#[command(name = "vidscout", about = "Find playable video URLs in public social-media pages")]
struct Cli {
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and list candidate video URLs
    Lookup(lookup::LookupCmd),
    /// Run extraction over a saved page (file or stdin)
    Scan(scan::ScanCmd),
    /// Serve GET /api/extract?url=...
    Serve(server::ServeCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and VIDSCOUT_LOG_FORMAT
    telemetry::config::init_tracing();

    match cli.command {
        Commands::Lookup(args) => lookup::run(args).await?,
        Commands::Scan(args) => scan::run(args)?,
        Commands::Serve(args) => server::run(args).await?,
    }

    Ok(())
}
