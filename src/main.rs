use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let filter = if cli.verbose {
        EnvFilter::new("agroplan=debug")
    } else {
        EnvFilter::new("agroplan=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Status(args) => cli::status::execute(args, config),
        Commands::Progress(args) => cli::progress::execute(args, config),
        Commands::Reason(args) => cli::reason::execute(args, config),
        Commands::Summary(args) => cli::summary::execute(args, config),
        Commands::Schema => cli::schema::execute(),
    }
}
