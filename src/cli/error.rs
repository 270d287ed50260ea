use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum LiteralError {
    #[error("empty integer literal")]
    #[diagnostic(code(literal::empty), help("Pass a number such as 42, -7 or 0xff"))]
    Empty,

    #[error("{literal:?} is not an integer literal")]
    #[diagnostic(
        code(literal::invalid_digit),
        help("Use decimal digits, or a 0x, 0o or 0b prefix for hex, octal or binary")
    )]
    InvalidDigit { literal: String },

    #[error("{literal} is outside the range {min}..={max}")]
    #[diagnostic(code(literal::out_of_range), help("Values are never truncated to fit"))]
    OutOfRange {
        literal: String,
        min: i128,
        max: i128,
    },
}

#[derive(Error, Debug, Diagnostic)]
pub enum HarnessError {
    #[error("Unable to process word argument")]
    #[diagnostic(code(pack::word))]
    Word {
        #[source]
        source: LiteralError,
    },

    #[error("Unable to process arg {position}")]
    #[diagnostic(code(unpack::byte), help("Each argument must be an unsigned byte (0..=255)"))]
    Byte {
        position: usize,
        #[source]
        source: LiteralError,
    },

    #[error("Expected {expected} byte arguments, got {got}")]
    #[diagnostic(code(unpack::byte_count))]
    ByteCount { expected: usize, got: usize },

    #[error("Unable to write output")]
    #[diagnostic(code(harness::io))]
    Io(#[from] std::io::Error),
}
