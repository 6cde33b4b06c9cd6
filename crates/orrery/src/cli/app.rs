use clap::{Parser, Subcommand};

use super::classify::ClassifyArg;
use super::fetch::FetchArg;

#[derive(Clone, Debug, Parser)]
#[command(name = "orrery", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "f", name = "fetch", about = "Fetch resources and report their status")]
    Fetch(FetchArg),
    #[command(alias = "c", name = "classify", about = "Show whether URLs are fetched as text or binary")]
    Classify(ClassifyArg),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn fetch_takes_urls_and_options() {
        let app = App::try_parse_from([
            "orrery",
            "fetch",
            "--poll-ms",
            "20",
            "https://x.test/a.png",
            "https://x.test/b.txt",
        ])
        .unwrap();

        let Commands::Fetch(arg) = app.cmd else {
            panic!("expected fetch");
        };
        assert_eq!(arg.urls.len(), 2);
        assert_eq!(arg.poll_ms, 20);
        assert!(arg.config.is_none());
    }

    #[test]
    fn fetch_requires_a_url() {
        assert!(App::try_parse_from(["orrery", "fetch"]).is_err());
    }
}
