use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use tracing::{debug, trace};

use super::{parse_byte, HarnessError};
use crate::WIDTH;

/// Unpack eight little-endian bytes into a signed 64-bit integer
#[derive(Parser, Debug)]
#[command(name = "unpack", version)]
pub struct UnpackArgs {
    /// Bytes b0 through b7, least significant first (decimal, or 0x/0o/0b prefixed)
    #[arg(value_name = "BYTE", num_args = 8, required = true, allow_negative_numbers = true)]
    pub bytes: Vec<String>,
}

pub fn run(args: &UnpackArgs, out: &mut impl Write) -> Result<(), HarnessError> {
    if args.bytes.len() != WIDTH {
        return Err(HarnessError::ByteCount {
            expected: WIDTH,
            got: args.bytes.len(),
        });
    }

    let mut bytes = [0u8; WIDTH];
    for (index, (byte, literal)) in bytes.iter_mut().zip(&args.bytes).enumerate() {
        *byte = parse_byte(literal).map_err(|source| HarnessError::Byte {
            position: index + 1,
            source,
        })?;
        trace!(index, byte = *byte, "parsed byte");
    }

    let word = crate::unpack_signed(&bytes);
    debug!(?bytes, word, "unpacked word");

    writeln!(out, "{word}")?;
    Ok(())
}

pub fn main() -> ExitCode {
    super::init_tracing();
    let args = UnpackArgs::parse();
    super::report(run(&args, &mut io::stdout().lock()))
}
