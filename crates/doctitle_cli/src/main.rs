use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use doctitle_cli::commands::{run_root_url, run_title, run_titles};
use doctitle_cli::config_loader::resolve_organization;

#[derive(Debug, Parser)]
#[command(name = "doctitle", about = "Compose documentation page titles.")]
struct Cli {
    /// Organization selecting the title suffix. Defaults to $REACT_APP_ORGANIZATION, then "mdn".
    #[arg(long, global = true)]
    organization: Option<String>,
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Print the root URL of each document URL.")]
    RootUrl {
        #[arg(required = true)]
        urls: Vec<String>,
    },
    #[command(about = "Print the page title of one document.")]
    Title {
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long, value_name = "PATH")]
        index: Option<PathBuf>,
    },
    #[command(about = "Print page titles for every document in an index.")]
    Titles {
        #[arg(long, value_name = "PATH")]
        index: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let mut out = io::stdout().lock();
    match &cli.command {
        Command::RootUrl { urls } => run_root_url(&mut out, urls),
        Command::Title { title, url, index } => {
            let organization = resolve_organization(cli.organization.as_deref())?;
            run_title(&mut out, &organization, title, url, index.as_deref())
        }
        Command::Titles { index } => {
            let organization = resolve_organization(cli.organization.as_deref())?;
            run_titles(&mut out, &organization, index).map(|_| ())
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => "warn",
        1 => "doctitle_core=debug,doctitle_cli=debug,info",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
