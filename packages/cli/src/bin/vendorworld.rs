use std::path::PathBuf;
use std::process;

use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;

use vendorworld_cli::report::write_report;
use vendorworld_cli::server::run_server;
use vendorworld_cli::{init_tracing, Config};
use vendorworld_reports::DateRange;
use vendorworld_storage::connect;

#[derive(Parser)]
#[command(name = "vendorworld")]
#[command(about = "VendorWorld - RFQ and vendor quote management")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<std::net::IpAddr>,
    },
    /// Export a user's RFQ report as CSV
    Report {
        /// User id whose RFQs are reported
        #[arg(long)]
        user: String,
        /// Date range: week, month, or quarter
        #[arg(long, default_value = "month")]
        range: DateRange,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    let mut config = Config::from_env()?;

    match command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            run_server(config).await
        }
        Commands::Report { user, range, out } => {
            let pool = connect(&config.database).await?;
            let path = write_report(pool, &user, range, &out, Utc::now()).await?;
            println!("{} {}", "Report written:".green().bold(), path.display());
            Ok(())
        }
    }
}
