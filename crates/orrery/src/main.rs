use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::app::{App, Commands};

mod cli;

fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("orrery=info,orrery_request=info"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let app = App::parse();
    match app.cmd {
        Commands::Fetch(arg) => arg.run(),
        Commands::Classify(arg) => {
            arg.run();
            Ok(())
        }
    }
}
