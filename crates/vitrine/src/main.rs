mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vitrine",
    version,
    about = "Runtime window overlay control for Windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List every visible top-level window
    List {
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the foreground window as a host would see it
    Info,
    /// Run desktop icon-layer discovery and report the outcome
    Probe,
    /// Walk this console window through the overlay toggles
    Demo {
        /// Seconds to hold each toggle
        #[arg(long, default_value_t = 2)]
        hold: u64,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List { json } => commands::list::execute(json),
        Commands::Info => commands::info::execute(),
        Commands::Probe => commands::probe::execute(),
        Commands::Demo { hold } => commands::demo::execute(hold),
    }
}
