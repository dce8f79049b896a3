mod cmd;
mod config;
mod error;

use clap::Parser;
use config::{Cli, CliConfig, Commands};

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Encode(args) => cmd::encode::run(&args, &config),
        Commands::Decode(args) => cmd::decode::run(&args, &config),
        Commands::Schema => cmd::schema::run(&config),
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
