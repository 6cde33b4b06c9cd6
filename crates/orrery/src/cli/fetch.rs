use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::Context;
use clap::Args;
use orrery_request::{ClientConfig, FetchRuntime, Request, ReqwestHost, Snapshot, classify};
use tracing::info;

use super::classify::kind_label;

#[derive(Clone, Debug, Args)]
pub struct FetchArg {
    /// TOML file with HTTP client settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Longest wait for the host between two polling rounds, in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub poll_ms: u64,

    #[arg(required = true)]
    pub urls: Vec<String>,
}

impl FetchArg {
    pub fn run(&self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => ClientConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => ClientConfig::default(),
        };

        let host = Rc::new(ReqwestHost::new(&config).context("starting HTTP host")?);
        let runtime = FetchRuntime::init(host.clone(), std::env::temp_dir());
        let requests: Vec<_> = self.urls.iter().map(|url| runtime.create(url.as_str())).collect();

        let wait = Duration::from_millis(self.poll_ms);
        let rounds = drive(&runtime, &requests, || {
            host.wait(wait);
        });
        info!(requests = requests.len(), rounds, "all requests finished");

        for request in &requests {
            println!("{}", report_line(request.url(), &runtime.get_data(request)));
        }

        for request in requests {
            runtime.delete(Some(request));
        }
        Ok(())
    }
}

/// Poll every request, then let the host deliver, until all are finished.
///
/// Returns the number of rounds.
fn drive(runtime: &FetchRuntime, requests: &[Request], mut wait: impl FnMut()) -> u64 {
    let mut rounds = 0;
    while !requests.iter().all(|r| runtime.is_finished(r)) {
        for request in requests {
            runtime.get_data(request);
        }
        wait();
        rounds += 1;
    }
    rounds
}

fn report_line(url: &str, snapshot: &Snapshot) -> String {
    format!(
        "{} {:>10} {:<6} {url}",
        snapshot.status_code,
        snapshot.size,
        kind_label(classify(url))
    )
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use orrery_request::{MAX_IN_FLIGHT, ScriptedHost};

    use super::*;

    #[test]
    fn drive_runs_until_every_request_finishes() {
        let host = Rc::new(ScriptedHost::new());
        let runtime = FetchRuntime::init(host.clone(), "unused");
        let requests: Vec<_> = (0..MAX_IN_FLIGHT + 4)
            .map(|i| runtime.create(format!("https://x.test/{i}.txt")))
            .collect();

        let rounds = drive(&runtime, &requests, || {
            for handle in host.pending() {
                host.succeed(handle, b"ok".to_vec());
            }
        });

        assert_eq!(rounds, 2);
        assert_eq!(host.calls().len(), MAX_IN_FLIGHT + 4);
        assert!(requests.iter().all(|r| runtime.get_data(r).status_code == 200));
    }

    #[test]
    fn drive_with_nothing_to_do_takes_no_rounds() {
        let runtime = FetchRuntime::init(Rc::new(ScriptedHost::new()), "unused");
        assert_eq!(drive(&runtime, &[], || unreachable!()), 0);
    }

    #[test]
    fn report_line_layout() {
        let snapshot = Snapshot {
            data: None,
            size: 5,
            status_code: 200,
        };
        assert_eq!(
            report_line("https://x.test/def.txt", &snapshot),
            "200          5 text   https://x.test/def.txt"
        );

        let failed = Snapshot {
            status_code: 404,
            ..Snapshot::default()
        };
        assert_eq!(
            report_line("https://x.test/a.png", &failed),
            "404          0 binary https://x.test/a.png"
        );
    }
}
