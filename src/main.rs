//! Journeymap CLI - Map user journeys as boards of steps, actions and workflows

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use journeymap::cli::commands::{self, profile::ProfileArgs};
use journeymap::cli::{Cli, Commands};
use journeymap::errors::to_exit_code;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli);

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> journeymap::Result<()> {
    let cwd = cli.cwd.as_deref();
    let dry_run = cli.dry_run;

    match cli.command {
        Some(Commands::Init { force, empty }) => commands::init::run(cwd, force, empty, dry_run),
        Some(Commands::Show { tag, json }) => commands::show::run(cwd, tag, json),
        Some(Commands::Groups { json }) => commands::groups::run(cwd, json),
        Some(Commands::Project { action }) => commands::project::run(cwd, dry_run, action),
        Some(Commands::Persona { action }) => commands::persona::run(cwd, dry_run, action),
        Some(Commands::Column { action }) => commands::column::run(cwd, dry_run, action),
        Some(Commands::Card { action }) => commands::card::run(cwd, dry_run, action),
        Some(Commands::Workflow { action }) => commands::workflow::run(cwd, dry_run, action),
        Some(Commands::Import { file, header_row }) => {
            commands::import::run(cwd, dry_run, &file, header_row)
        }
        Some(Commands::Profile {
            name,
            email,
            plan,
            card_holder,
            card_number,
            expiry,
        }) => commands::profile::run(
            cwd,
            dry_run,
            ProfileArgs {
                name,
                email,
                plan,
                card_holder,
                card_number,
                expiry,
            },
        ),
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
