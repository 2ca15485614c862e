use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lifeweeks-cli", version, about = "Lifeweeks CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Week grid rendering
    Grid {
        #[command(subcommand)]
        action: commands::grid::GridAction,
    },
    /// Decade navigation anchors
    Decades {
        #[command(subcommand)]
        action: commands::decades::DecadesAction,
    },
    /// Event dataset inspection
    Events {
        #[command(subcommand)]
        action: commands::events::EventsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Grid { action } => commands::grid::run(action),
        Commands::Decades { action } => commands::decades::run(action),
        Commands::Events { action } => commands::events::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
