// 🔢 Field Parser - Text → exact values
// Money as integer cents, dates and times via chrono, no floats anywhere

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed amount: {0:?}")]
    MalformedAmount(String),

    #[error("malformed date (expected YYYY-MM-DD): {0:?}")]
    MalformedDate(String),

    #[error("malformed time (expected HH:MM): {0:?}")]
    MalformedTime(String),
}

// ============================================================================
// MONEY
// ============================================================================

/// Cents - A non-negative monetary amount in exact integer cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(pub u64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    /// Largest accepted amount, $1,000,000,000.00. Keeps every per-rule sum
    /// far from u64 overflow regardless of item count.
    pub const MAX: Cents = Cents(100_000_000_000);

    pub fn value(self) -> u64 {
        self.0
    }

    /// Whole-dollar amount (no cent component)
    pub fn is_round_dollar(self) -> bool {
        self.0 % 100 == 0
    }

    /// Exact multiple of a quarter
    pub fn is_multiple_of_quarter(self) -> bool {
        self.0 % 25 == 0
    }
}

impl std::fmt::Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Parse a decimal amount like "35.35", "9" or "9.5" into cents
///
/// Grammar: `digits ["." 1*2digits]`. Signs, exponents, whitespace and
/// more than two fractional digits are rejected, as is anything above
/// [`Cents::MAX`].
pub fn parse_money(text: &str) -> Result<Cents, ParseError> {
    let malformed = || ParseError::MalformedAmount(text.to_string());

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text, None),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let fraction_cents = match fraction {
        None => 0,
        Some(f) if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(malformed());
        }
        // "5" means 50 cents, "05" means 5 cents
        Some(f) => {
            let digits: u64 = f.parse().map_err(|_| malformed())?;
            if f.len() == 1 {
                digits * 10
            } else {
                digits
            }
        }
    };

    let dollars: u64 = whole.parse().map_err(|_| malformed())?;

    dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(fraction_cents))
        .filter(|c| *c <= Cents::MAX.0)
        .map(Cents)
        .ok_or_else(malformed)
}

// ============================================================================
// DATE & TIME
// ============================================================================

/// Parse a canonical YYYY-MM-DD calendar date
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let malformed = || ParseError::MalformedDate(text.to_string());

    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !shape_ok {
        return Err(malformed());
    }

    let year: i32 = text[0..4].parse().map_err(|_| malformed())?;
    let month: u32 = text[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = text[8..10].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Parse a 24-hour HH:MM time of day
pub fn parse_time(text: &str) -> Result<NaiveTime, ParseError> {
    let malformed = || ParseError::MalformedTime(text.to_string());

    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 5
        && bytes[2] == b':'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || b.is_ascii_digit());

    if !shape_ok {
        return Err(malformed());
    }

    let hour: u32 = text[0..2].parse().map_err(|_| malformed())?;
    let minute: u32 = text[3..5].parse().map_err(|_| malformed())?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(malformed)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_money_valid() {
        assert_eq!(parse_money("35.35"), Ok(Cents(3535)));
        assert_eq!(parse_money("9.00"), Ok(Cents(900)));
        assert_eq!(parse_money("0.05"), Ok(Cents(5)));
        assert_eq!(parse_money("9.5"), Ok(Cents(950)));
        assert_eq!(parse_money("12"), Ok(Cents(1200)));
        assert_eq!(parse_money("0"), Ok(Cents::ZERO));
    }

    #[test]
    fn test_parse_money_rejects_garbage() {
        for bad in ["", "abc", "-1.00", "+1.00", "1.234", "1.", ".50", "1,00", " 1.00", "1e3", "1.0a"] {
            assert_eq!(
                parse_money(bad),
                Err(ParseError::MalformedAmount(bad.to_string())),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_parse_money_upper_bound() {
        assert_eq!(parse_money("1000000000.00"), Ok(Cents::MAX));
        assert_eq!(parse_money("1000000000"), Ok(Cents::MAX));
        assert!(parse_money("1000000000.01").is_err());

        // Fits in u64 cents but is far above the cap
        assert!(parse_money("184467440737095516.15").is_err());
        // checked_mul overflow
        assert!(parse_money("184467440737095517").is_err());
        // checked_add overflow
        assert!(parse_money("184467440737095516.16").is_err());
        // Too many digits for u64 at all
        assert!(parse_money("99999999999999999999999").is_err());
    }

    #[test]
    fn test_cents_checks() {
        assert!(Cents(900).is_round_dollar());
        assert!(!Cents(910).is_round_dollar());
        assert!(Cents(925).is_multiple_of_quarter());
        assert!(!Cents(910).is_multiple_of_quarter());
        assert_eq!(Cents(3535).to_string(), "35.35");
        assert_eq!(Cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2022-01-01").unwrap();
        assert_eq!(date.day(), 1);

        assert!(parse_date("2024-02-29").is_ok());
        assert!(parse_date("2023-02-29").is_err());
        assert!(parse_date("2022-13-01").is_err());
        assert!(parse_date("2022-1-01").is_err());
        assert!(parse_date("01/01/2022").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("14:00").unwrap().hour(), 14);
        assert!(parse_time("00:00").is_ok());
        assert!(parse_time("23:59").is_ok());
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("12:60").is_err());
        assert!(parse_time("9:30").is_err());
        assert!(parse_time("2pm").is_err());
    }
}
