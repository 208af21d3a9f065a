use crate::exit::{CliError, CliResult, USAGE};

/// Parse a hex string into bytes. Whitespace, colons, and a leading `0x`
/// are tolerated so captures can be pasted from packet dumps as-is.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let cleaned: Vec<u8> = input
        .trim()
        .trim_start_matches("0x")
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();

    if cleaned.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            format!("hex input has odd length ({} digits)", cleaned.len()),
        ));
    }

    cleaned
        .chunks_exact(2)
        .map(|pair| match (hex_value(pair[0]), hex_value(pair[1])) {
            (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
            _ => Err(CliError::new(
                USAGE,
                format!("invalid hex digits: {}", String::from_utf8_lossy(pair)),
            )),
        })
        .collect()
}

fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

pub fn format_hex(data: &[u8]) -> String {
    data.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_hex() {
        assert_eq!(parse_hex("00ff10").unwrap(), vec![0x00, 0xFF, 0x10]);
    }

    #[test]
    fn tolerates_separators_and_prefix() {
        assert_eq!(parse_hex("0xde:ad be ef").unwrap(), vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(parse_hex("  01 02\n03 ").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn rejects_odd_length_and_bad_digits() {
        assert!(parse_hex("abc").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn rejects_non_ascii_input_with_usage_error() {
        // Multi-byte characters must get the same USAGE error as any other
        // bad digit, whatever their UTF-8 byte length.
        let err = parse_hex("\u{20AC}\u{20AC}").unwrap_err();
        assert_eq!(err.code, USAGE);

        let err = parse_hex("\u{20AC}").unwrap_err();
        assert_eq!(err.code, USAGE);

        let err = parse_hex("00\u{E9}00").unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn formats_lowercase_pairs() {
        assert_eq!(format_hex(&[0x00, 0xAB, 0x10]), "00ab10");
        assert_eq!(format_hex(&[]), "");
    }
}
