mod cli;
mod client;
mod error;
mod report;
mod resolve;

use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{program_name, Cli};
use crate::error::ExitClass;
use crate::report::Reporter;

/// Trace output is opt-in so stderr only carries failure lines by default.
const LOG_ENV: &str = "SOCKETCLIENT_LOG";

fn setup_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    setup_tracing();
    report::colour_only_on_terminal();

    let mut args = std::env::args_os();
    let reporter = Reporter::new(program_name(args.next().as_deref()));

    let Some(cli) = Cli::from_args(args) else {
        return reporter.usage();
    };
    let (host, port) = (cli.host(), cli.port());
    debug!("{} connecting to {}:{}", reporter.program_name(), host, port);

    let payload = cli.payload_bytes();
    let mut out = std::io::stdout().lock();

    match client::run(&host, &port, &payload, &mut out) {
        Ok(()) => ExitClass::Success.into(),
        Err(e) => reporter.fail(&e),
    }
}
