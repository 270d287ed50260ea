//! Command-line harnesses behind the `pack` and `unpack` binaries.
//!
//! Results go to stdout. Diagnostics and `RUST_LOG`-filtered tracing output go to stderr.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

mod error;
mod literal;
pub mod pack;
pub mod unpack;

pub use self::{
    error::{HarnessError, LiteralError},
    literal::{parse_byte, parse_word},
};

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn report(result: Result<(), HarnessError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(%error, "harness failed");
            eprintln!("{:?}", miette::Report::new(error));
            ExitCode::FAILURE
        }
    }
}
