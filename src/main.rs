//! Enrollment - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enrollment::{
    cli::{Cli, Commands},
    commands,
    config::Settings,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let settings = Settings::from_env();
    tracing::debug!(?settings, "Configuration loaded");

    // Execute command
    let fixtures = cli.fixtures.as_deref();
    let result = match cli.command {
        Commands::List { user } => commands::enrollment::list(user, fixtures, &settings).await,
        Commands::Get { user, course_id } => {
            commands::enrollment::get(user, course_id, fixtures, &settings).await
        }
        Commands::Enroll(args) => commands::enrollment::enroll(args, fixtures, &settings).await,
        Commands::Update(args) => commands::enrollment::update(args, fixtures, &settings).await,
        Commands::Details { course_id } => {
            commands::enrollment::details(course_id, fixtures, &settings).await
        }
        Commands::About(args) => commands::about::execute(args, &settings).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
