//! Shareable address of the timer.
//!
//! The configured duration travels in the `time` query parameter, so an
//! address like `http://localhost:3000/?time=7` reproduces a seven-minute
//! timer. Other parameters and the fragment are carried through untouched.

use std::fmt;

use crate::timer::Minutes;

/// Query parameter holding the duration in minutes
pub const TIME_PARAM: &str = "time";

/// Base address used when none is configured
pub const DEFAULT_BASE: &str = "http://localhost:3000/";

/// A parsed address: base, ordered query pairs and optional fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    base: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    /// Parse an address. Never fails; anything before `?` is kept as the base.
    pub fn parse(address: &str) -> Self {
        let (rest, fragment) = match address.split_once('#') {
            Some((rest, frag)) => (rest, Some(frag.to_string())),
            None => (address, None),
        };
        let (base, query) = match rest.split_once('?') {
            Some((base, query)) => (base, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            base: base.to_string(),
            query,
            fragment,
        }
    }

    /// Resolve user input against this address.
    ///
    /// Input starting with `?` only replaces the query (and fragment) of the
    /// current address; anything else is taken as a full new address.
    pub fn navigate(&self, input: &str) -> Self {
        let input = input.trim();
        if input.starts_with('?') {
            let mut next = Self::parse(input);
            next.base.clone_from(&self.base);
            next
        } else {
            Self::parse(input)
        }
    }

    /// First value of a query parameter
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a query parameter in place: the first occurrence keeps its position,
    /// later duplicates are dropped, and a missing key is appended.
    pub fn set_param(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.query.iter().position(|(k, _)| k == key) {
            Some(first) => {
                self.query[first].1 = value;
                let mut idx = 0;
                self.query.retain(|(k, _)| {
                    let keep = idx <= first || k != key;
                    idx += 1;
                    keep
                });
            }
            None => self.query.push((key.to_string(), value)),
        }
    }

    /// Duration carried by the address, defaulting when absent or invalid
    pub fn minutes(&self) -> Minutes {
        Minutes::parse_or_default(self.param(TIME_PARAM))
    }

    /// Rewrite the duration parameter
    pub fn set_minutes(&mut self, minutes: Minutes) {
        self.set_param(TIME_PARAM, minutes.to_string());
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        if !self.query.is_empty() {
            let query = form_urlencoded::Serializer::new(String::new())
                .extend_pairs(&self.query)
                .finish();
            write!(f, "?{query}")?;
        }
        if let Some(ref fragment) = self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

/// Form-urlencoded pairs: `+` is a space, `%XX` a byte, malformed escapes kept as-is
fn parse_query(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

impl Default for Location {
    fn default() -> Self {
        Self::parse(DEFAULT_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_time_defaults_to_ten_minutes() {
        let location = Location::parse("http://localhost:3000/");
        assert_eq!(location.minutes().get(), 10);
    }

    #[test]
    fn reads_time_parameter() {
        let location = Location::parse("http://localhost:3000/?time=7");
        assert_eq!(location.minutes().get(), 7);
    }

    #[test]
    fn out_of_range_time_falls_back_to_default() {
        for address in ["/?time=150", "/?time=0", "/?time=-3", "/?time=abc", "/?time="] {
            assert_eq!(Location::parse(address).minutes().get(), 10, "{address}");
        }
    }

    #[test]
    fn first_time_parameter_wins() {
        let location = Location::parse("/?time=5&time=20");
        assert_eq!(location.minutes().get(), 5);
    }

    #[test]
    fn set_minutes_replaces_in_place_and_keeps_other_params() {
        let mut location = Location::parse("https://talks.example/room?lang=en&time=5&time=9#slides");
        location.set_minutes(Minutes::new(15).unwrap());
        assert_eq!(
            location.to_string(),
            "https://talks.example/room?lang=en&time=15#slides"
        );
    }

    #[test]
    fn set_minutes_appends_when_missing() {
        let mut location = Location::parse("http://localhost:3000/");
        location.set_minutes(Minutes::new(20).unwrap());
        assert_eq!(location.to_string(), "http://localhost:3000/?time=20");
    }

    #[test]
    fn navigate_with_query_only_keeps_base() {
        let current = Location::parse("https://talks.example/room?time=5");
        let next = current.navigate("?time=7");
        assert_eq!(next.to_string(), "https://talks.example/room?time=7");
        assert_eq!(next.minutes().get(), 7);
    }

    #[test]
    fn navigate_with_full_address_replaces_everything() {
        let current = Location::parse("https://talks.example/room?time=5");
        let next = current.navigate("  http://other.example/?time=12 ");
        assert_eq!(next.to_string(), "http://other.example/?time=12");
    }

    #[test]
    fn components_are_decoded_and_reencoded() {
        let location = Location::parse("/?title=Rust+%26+TUIs&time=3");
        assert_eq!(location.param("title"), Some("Rust & TUIs"));
        assert_eq!(location.to_string(), "/?title=Rust+%26+TUIs&time=3");
    }

    #[test]
    fn non_ascii_values_round_trip_percent_encoded() {
        let mut location = Location::parse("/");
        location.set_param("title", "Vortrag über Rust");
        assert_eq!(location.to_string(), "/?title=Vortrag+%C3%BCber+Rust");
        let reparsed = Location::parse(&location.to_string());
        assert_eq!(reparsed.param("title"), Some("Vortrag über Rust"));
    }

    #[test]
    fn truncated_escape_is_kept_literally() {
        let location = Location::parse("/?note=100%&x=%4");
        assert_eq!(location.param("note"), Some("100%"));
        assert_eq!(location.param("x"), Some("%4"));
    }
}
