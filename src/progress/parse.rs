/// Reads a base-10 integer from the start of `input`, the way `parseInt(input, 10)`
/// does in a browser: leading whitespace and an optional sign are accepted, then
/// the longest run of digits is taken and the rest is ignored.
///
/// Returns `None` when no digit follows. Magnitudes beyond `i64` saturate.
pub fn parse_int(input: &str) -> Option<i64> {
    let rest = input.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut magnitude: i64 = 0;
    let mut seen = false;
    for digit in digits {
        seen = true;
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::parse_int;

    #[test]
    fn plain_integers() {
        assert_eq!(parse_int("0"), Some(0));
        assert_eq!(parse_int("45"), Some(45));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("-12"), Some(-12));
    }

    #[test]
    fn stops_at_first_non_digit() {
        assert_eq!(parse_int("67.9"), Some(67));
        assert_eq!(parse_int("30%"), Some(30));
        assert_eq!(parse_int("1e3"), Some(1));
    }

    #[test]
    fn skips_leading_whitespace_only() {
        assert_eq!(parse_int(" \t\n 8"), Some(8));
        assert_eq!(parse_int("- 8"), None);
        assert_eq!(parse_int("x8"), None);
    }

    #[test]
    fn no_digits_is_none() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("   "), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("NaN"), None);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(parse_int("123456789012345678901234567890"), Some(i64::MAX));
        assert_eq!(parse_int("-123456789012345678901234567890"), Some(-i64::MAX));
    }
}
