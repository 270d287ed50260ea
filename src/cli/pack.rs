use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, trace};

use super::{parse_word, HarnessError};
use crate::WIDTH;

/// Pack a 64-bit integer into eight little-endian bytes
#[derive(Parser, Debug)]
#[command(name = "pack", version)]
pub struct PackArgs {
    /// Signed or unsigned 64-bit integer (decimal, or 0x/0o/0b prefixed)
    #[arg(allow_negative_numbers = true)]
    pub word: String,
}

pub fn run(args: &PackArgs, out: &mut impl Write) -> Result<(), HarnessError> {
    let word = parse_word(&args.word).map_err(|source| HarnessError::Word { source })?;
    debug!(literal = %args.word, word, "packing word");

    let bytes = crate::pack(word);
    for (index, byte) in bytes.iter().enumerate() {
        trace!(index, byte, "packed byte");
    }

    writeln!(out, "{}", format_bytes(&bytes))?;
    Ok(())
}

/// Renders each byte as `\t0x..` in byte order.
pub fn format_bytes(bytes: &[u8; WIDTH]) -> String {
    bytes.iter().map(|byte| format!("\t{byte:#x}")).collect()
}

pub fn main() -> ExitCode {
    super::init_tracing();
    let args = PackArgs::parse();
    super::report(run(&args, &mut io::stdout().lock()))
}
