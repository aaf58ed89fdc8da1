//! netbox-export binary entry point

use clap::{Args, Parser, Subcommand};
use netbox_export::cli::commands::{devices::handle_devices, paths::handle_paths};
use netbox_export::cli::resolve_connection;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netbox-export", version, about = "Export NetBox inventory to flat JSON with hierarchy paths")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Export every region and site with its /World/... path
    Paths(ExportArgs),
    /// Export devices with management IP and site path
    Devices(ExportArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Base URL of the NetBox instance (falls back to NETBOX_URL)
    #[arg(long)]
    url: Option<String>,

    /// NetBox API token (falls back to NETBOX_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Output file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Paths(args) => {
            let connection = resolve_connection(args.url, args.token)?;
            let output = args
                .output
                .unwrap_or_else(|| PathBuf::from("./data/netbox_paths.json"));
            handle_paths(&connection, &output)?;
        }
        Command::Devices(args) => {
            let connection = resolve_connection(args.url, args.token)?;
            let output = args
                .output
                .unwrap_or_else(|| PathBuf::from("./data/netbox_devices.json"));
            handle_devices(&connection, &output)?;
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
