//! wiredump binary - dump capture files given as arguments.
//!
//! Usage: `wiredump <capture>...`
//!
//! Files are processed in argument order; the first fatal error stops the
//! run and becomes the process exit status. `RUST_LOG` controls ambient
//! log output (stderr); rendered values own stdout.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    for path in std::env::args().skip(1) {
        if let Err(e) = wiredump::dump(&path) {
            eprintln!("wiredump: {path}: {e}");
            return ExitCode::from(e.exit_code());
        }
    }

    ExitCode::SUCCESS
}
