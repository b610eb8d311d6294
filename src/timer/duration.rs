//! Whole-minute durations accepted by the timer.

use std::fmt;

/// A validated duration in whole minutes, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minutes(u32);

impl Minutes {
    /// Shortest accepted duration
    pub const MIN: u32 = 1;
    /// Longest accepted duration (two display digits)
    pub const MAX: u32 = 99;
    /// Used when no valid duration was supplied
    pub const DEFAULT: Minutes = Minutes(10);

    /// Validate a raw minute count
    pub fn new(minutes: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&minutes)
            .then_some(Self(minutes))
    }

    /// Parse free-form user text.
    ///
    /// Leading whitespace is skipped and an optional sign is accepted, then the
    /// leading run of digits is read, so `"7"`, `" 7"` and `"7min"` all give 7.
    /// Anything without leading digits, or outside the accepted range, is `None`.
    pub fn parse(text: &str) -> Option<Self> {
        parse_leading_int(text)
            .and_then(|n| u32::try_from(n).ok())
            .and_then(Self::new)
    }

    /// Parse, falling back to [`Minutes::DEFAULT`]
    pub fn parse_or_default(text: Option<&str>) -> Self {
        text.and_then(Self::parse).unwrap_or(Self::DEFAULT)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Duration in seconds
    pub fn as_seconds(self) -> u32 {
        self.0 * 60
    }
}

impl Default for Minutes {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-click durations offered in the settings panel
pub const PRESETS: [Minutes; 5] = [Minutes(5), Minutes(10), Minutes(15), Minutes(20), Minutes(30)];

/// Read the integer prefix of `text`, returning `None` when there are no digits.
fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Saturate instead of overflowing; anything that large is out of range anyway
    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_full_range() {
        for m in 1..=99 {
            assert_eq!(Minutes::new(m).map(Minutes::get), Some(m));
        }
        assert_eq!(Minutes::new(0), None);
        assert_eq!(Minutes::new(100), None);
    }

    #[test]
    fn parse_reads_integer_prefix() {
        assert_eq!(Minutes::parse("7"), Minutes::new(7));
        assert_eq!(Minutes::parse("  12"), Minutes::new(12));
        assert_eq!(Minutes::parse("7min"), Minutes::new(7));
        assert_eq!(Minutes::parse("+5"), Minutes::new(5));
        assert_eq!(Minutes::parse("3.9"), Minutes::new(3));
    }

    #[test]
    fn parse_rejects_invalid_text() {
        for text in ["", "abc", "-5", "0", "100", "150", "min7", " ", "99999999999999999999999"] {
            assert_eq!(Minutes::parse(text), None, "{text:?} should be rejected");
        }
    }

    #[test]
    fn parse_or_default_falls_back_to_ten() {
        assert_eq!(Minutes::parse_or_default(None).get(), 10);
        assert_eq!(Minutes::parse_or_default(Some("150")).get(), 10);
        assert_eq!(Minutes::parse_or_default(Some("7")).get(), 7);
    }

    #[test]
    fn presets_are_valid_and_ascending() {
        assert!(PRESETS.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PRESETS.map(Minutes::get), [5, 10, 15, 20, 30]);
    }
}
