use std::num::IntErrorKind;

use super::LiteralError;

const RADIX_PREFIXES: [(&str, u32); 4] = [("0x", 16), ("0X", 16), ("0o", 8), ("0b", 2)];

/// Parses a signed or unsigned 64-bit literal into the word it denotes.
///
/// Negative values keep their two's complement bit pattern, so `-1` is `u64::MAX`.
pub fn parse_word(text: &str) -> Result<u64, LiteralError> {
    let value = parse_literal(text)?;

    if let Ok(word) = u64::try_from(value) {
        return Ok(word);
    }

    i64::try_from(value)
        .map(|signed| signed as u64)
        .map_err(|_| out_of_range(text, i64::MIN.into(), u64::MAX.into()))
}

/// Parses a literal that must fit in an unsigned byte.
pub fn parse_byte(text: &str) -> Result<u8, LiteralError> {
    let value = parse_literal(text)?;
    u8::try_from(value).map_err(|_| out_of_range(text, 0, u8::MAX.into()))
}

fn parse_literal(text: &str) -> Result<i128, LiteralError> {
    let literal = text.trim();

    let (negative, unsigned) = match literal.as_bytes().first() {
        None => return Err(LiteralError::Empty),
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        Some(_) => (false, literal),
    };

    let (radix, digits) = RADIX_PREFIXES
        .iter()
        .find_map(|(prefix, radix)| unsigned.strip_prefix(prefix).map(|rest| (*radix, rest)))
        .unwrap_or_else(|| match unsigned.strip_prefix('0') {
            // A leading zero with more digits is octal, as with strtol
            Some(rest) if !rest.is_empty() => (8, rest),
            _ => (10, unsigned),
        });

    // from_str_radix would accept a second sign here
    if digits.starts_with(['+', '-']) {
        return Err(invalid_digit(text));
    }

    // Saturate on overflow so each caller reports its own range
    let magnitude = match u128::from_str_radix(digits, radix) {
        Ok(magnitude) => i128::try_from(magnitude).unwrap_or(i128::MAX),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => i128::MAX,
        Err(_) => return Err(invalid_digit(text)),
    };

    Ok(if negative { -magnitude } else { magnitude })
}

fn invalid_digit(text: &str) -> LiteralError {
    LiteralError::InvalidDigit {
        literal: text.to_string(),
    }
}

fn out_of_range(text: &str, min: i128, max: i128) -> LiteralError {
    LiteralError::OutOfRange {
        literal: text.to_string(),
        min,
        max,
    }
}
