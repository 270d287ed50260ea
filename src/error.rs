use core::fmt;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Error {
    InvalidDataSize { expected: usize, got: usize },
    InvalidHexDigit(char),
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDataSize { expected, got } => {
                write!(f, "InvalidDataSize {{ expected: {expected}, got: {got} }}")
            }
            Error::InvalidHexDigit(c) => write!(f, "InvalidHexDigit({c:?})"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDataSize { expected, got } => {
                write!(f, "Invalid data size: expected {expected}, got {got}")
            }
            Error::InvalidHexDigit(c) => write!(f, "Invalid hex digit: {c:?}"),
        }
    }
}

impl core::error::Error for Error {}
