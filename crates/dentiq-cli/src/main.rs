use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dentiq_core::Config;

mod commands;
mod prompt;

#[derive(Parser)]
#[command(name = "dentiq", version, about = "Dental health widgets in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dental health calculator
    Calculator {
        #[command(subcommand)]
        action: commands::calculator::CalculatorAction,
    },
    /// Educational dental quest
    Quest {
        #[command(subcommand)]
        action: commands::quest::QuestAction,
    },
    /// Dental care tips
    Tips {
        #[command(subcommand)]
        action: commands::tips::TipsAction,
    },
    /// Dump a built-in catalog as JSON
    Catalog {
        #[arg(value_enum)]
        which: commands::catalog::CatalogKind,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_env("DENTIQ_LOG")
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let (config, load_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    init_tracing(&config);
    if let Some(e) = load_error {
        tracing::warn!("using default configuration: {e}");
    }

    let result = match cli.command {
        Commands::Calculator { action } => commands::calculator::run(action, &config),
        Commands::Quest { action } => commands::quest::run(action, &config),
        Commands::Tips { action } => commands::tips::run(action, &config),
        Commands::Catalog { which } => commands::catalog::run(which),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "dentiq", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
