use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::rename;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "modcon")]
#[command(version = VERSION)]
#[command(about = "Batch rename modifiers and constraints on scene objects and pose bones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename named items across the owners a scope query resolves to
    Rename(rename::RenameArgs),
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Rename(args) => output::response::finish(rename::run(args)),
    };

    std::process::exit(exit_code);
}
