//! Money parsing and formatting helpers
//!
//! Amounts are handled as signed cents internally; the raw entered strings
//! are kept on the record for display.

/// Parse a decimal string into cents. Returns `None` when the input is not a
/// plain decimal number. Fraction digits past the second are truncated.
pub fn parse_money(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (whole, frac) = match s.split_once('.') {
        Some((w, f)) => (w, f),
        None => (s, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut cents: i64 = whole.parse::<i64>().unwrap_or(0).saturating_mul(100);
    let mut digits = frac.bytes();
    if let Some(d) = digits.next() {
        cents += i64::from(d - b'0') * 10;
    }
    if let Some(d) = digits.next() {
        cents += i64::from(d - b'0');
    }

    Some(if negative { -cents } else { cents })
}

/// Lenient variant used for form components: anything unparseable counts
/// as zero, matching how the entry form treats blank taxes/ads/discount.
pub fn parse_money_or_zero(raw: &str) -> i64 {
    parse_money(raw).unwrap_or(0)
}

/// Render cents as a fixed two-decimal string, e.g. `1100` -> `"11.00"`.
pub fn format_money(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional() {
        assert_eq!(parse_money("10"), Some(1_000));
        assert_eq!(parse_money("10.5"), Some(1_050));
        assert_eq!(parse_money("10.55"), Some(1_055));
        assert_eq!(parse_money(".5"), Some(50));
        assert_eq!(parse_money("-3.25"), Some(-325));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("abc"), None);
        assert_eq!(parse_money("1,000"), None);
        assert_eq!(parse_money_or_zero("abc"), 0);
    }

    #[test]
    fn truncates_past_two_fraction_digits() {
        assert_eq!(parse_money("1.999"), Some(199));
    }

    #[test]
    fn formats_fixed_two() {
        assert_eq!(format_money(1_100), "11.00");
        assert_eq!(format_money(5), "0.05");
        assert_eq!(format_money(-325), "-3.25");
    }
}
