use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "paragen", version, about = "Generate Rust types and JSON codecs from schemas")]
struct Cli {
    /// More logging (-v: info, -vv: debug, -vvv: trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate (or regenerate) every unit of a schema
    Generate(commands::generate::GenerateArgs),
    /// Print one merged unit without writing it
    Show(commands::show::ShowArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let code = match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Show(args) => commands::show::run(args),
    };
    std::process::exit(code);
}
