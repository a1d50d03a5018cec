use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use athletic_destinations::{
    Catalog, DestinationFilter, DestinationsConfig, DestinationsError, FilterEvent,
    FilterSession, LandingPage, OutputFormat, Renderer, logging,
};

#[derive(Parser)]
#[command(name = "athletic-destinations")]
#[command(about = "Curated travel destinations for athletes: filter by region, interest or text")]
#[command(version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format, overrides the configured one
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the landing page with featured destinations
    Home,
    /// List destinations, optionally filtered
    List {
        /// Only destinations in this region (exact match)
        #[arg(long)]
        region: Option<String>,
        /// Only destinations offering this interest (exact match)
        #[arg(long)]
        interest: Option<String>,
        /// Case-insensitive text to look for in name and description
        #[arg(long)]
        search: Option<String>,
    },
    /// Show a single destination
    Show {
        /// Destination id
        id: u32,
    },
    /// List the available regions
    Regions,
    /// List the available interests
    Interests,
    /// Interactive filtering: read `region`, `interest`, `search` and `reset` lines from stdin
    Browse,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<DestinationsError>() {
                Some(app_err) => eprintln!("Error: {}", app_err.user_message()),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = DestinationsConfig::load_from_path(cli.config)?;
    logging::init(&config.logging, cli.verbose)?;
    debug!("Using config: {:?}", config);

    let format = cli.format.unwrap_or(config.display.format);
    let renderer = Renderer::new(format, config.display);
    let catalog = Catalog::builtin();

    let output = match cli.command.unwrap_or(Commands::Home) {
        Commands::Home => renderer.landing(&LandingPage::build(catalog))?,
        Commands::List {
            region,
            interest,
            search,
        } => {
            let filter = DestinationFilter {
                region,
                interest,
                search,
            };
            renderer.results(&catalog.query(&filter))?
        }
        Commands::Show { id } => {
            let destination = catalog.get(id).ok_or_else(|| {
                DestinationsError::validation(format!("no destination with id {id}"))
            })?;
            renderer.destination(destination)?
        }
        Commands::Regions => renderer.options("Regions", catalog.regions())?,
        Commands::Interests => renderer.options("Interests", catalog.interests())?,
        Commands::Browse => return browse(catalog, &renderer),
    };

    println!("{output}");
    Ok(())
}

fn browse(catalog: &Catalog, renderer: &Renderer) -> Result<()> {
    let mut session = FilterSession::new(catalog);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", renderer.options("Regions", session.region_options())?)?;
    writeln!(stdout, "{}", renderer.options("Interests", session.interest_options())?)?;
    writeln!(stdout, "{}", renderer.results(session.results())?)?;

    for line in stdin.lock().lines() {
        let line = line.with_context(|| "Failed to read filter command")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        // search text is passed through untrimmed
        match line.parse::<FilterEvent>() {
            Ok(event) => {
                let results = session.apply(event);
                writeln!(stdout, "{}", renderer.results(results)?)?;
            }
            Err(err) => {
                warn!("Rejected filter command '{}': {}", trimmed, err);
                writeln!(stdout, "{}", renderer.rejection(&err)?)?;
            }
        }
    }

    Ok(())
}
