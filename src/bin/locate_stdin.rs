//! Simple CLI that reads a chat page snapshot from stdin and outputs the
//! located replies as JSON to stdout.
//!
//! Usage: `locate_stdin <host-or-url> < page.html`
//!
//! Set `RUST_LOG=ai_reply_extract=debug` to see classification traces on
//! stderr.

use std::io::{self, Read};
use std::process::ExitCode;

use ai_reply_extract::{locate_url, locate_with_options, Error, LocateResult, Options, SiteRegistry};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let Some(target) = std::env::args().nth(1) else {
        eprintln!("usage: locate_stdin <host-or-url> < page.html");
        return ExitCode::from(2);
    };

    // Read HTML from stdin
    let mut html = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::from(1);
    }

    let registry = SiteRegistry::builtin();
    let options = Options::default();
    let result = if target.contains("://") {
        locate_url(&html, &target, &registry, &options)
    } else {
        locate_with_options(&html, &target, &registry, &options)
    };

    let output = match result {
        Ok(r) => r,
        Err(Error::NoResponseRegion) => LocateResult {
            site: target,
            regions: Vec::new(),
            warnings: vec![Error::NoResponseRegion.to_string()],
        },
        Err(err @ (Error::UnsupportedHost(_) | Error::InvalidUrl(_))) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(1);
        }
    };

    println!("{}", serde_json::to_string(&output).unwrap_or_default());
    ExitCode::SUCCESS
}
