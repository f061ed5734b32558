use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A single keyed value from a sparse vector.
///
/// The key identifies a slot; values for the same key are summed when
/// vectors are merged. Both components are 64-bit signed integers so that
/// sums over realistic input sizes stay in range.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    /// Slot identifier.
    pub key: i64,
    /// Value summed into the slot.
    pub value: i64,
}

impl Pair {
    /// Create a pair from its components.
    pub fn new(key: i64, value: i64) -> Self {
        Self { key, value }
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({} -> {})", self.key, self.value)
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.value)
    }
}

impl From<(i64, i64)> for Pair {
    fn from((key, value): (i64, i64)) -> Self {
        Self { key, value }
    }
}

impl FromStr for Pair {
    type Err = TypeError;

    /// Parse the `"<key> <value>"` form produced by [`fmt::Display`].
    fn from_str(s: &str) -> Result<Self, TypeError> {
        let mut tokens = s.split_whitespace();
        let key = tokens.next().ok_or(TypeError::MissingToken("key"))?;
        let value = tokens.next().ok_or(TypeError::MissingToken("value"))?;
        if let Some(extra) = tokens.next() {
            return Err(TypeError::TrailingToken(extra.to_string()));
        }
        Ok(Self {
            key: parse_component(key)?,
            value: parse_component(value)?,
        })
    }
}

fn parse_component(token: &str) -> Result<i64, TypeError> {
    token
        .parse()
        .map_err(|_| TypeError::InvalidInteger(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_space_separated() {
        let pair = Pair::new(3, -7);
        assert_eq!(format!("{pair}"), "3 -7");
    }

    #[test]
    fn display_parse_roundtrip() {
        let pair = Pair::new(-42, 99);
        let parsed: Pair = format!("{pair}").parse().unwrap();
        assert_eq!(pair, parsed);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let parsed: Pair = "  1\t2 ".parse().unwrap();
        assert_eq!(parsed, Pair::new(1, 2));
    }

    #[test]
    fn parse_rejects_missing_value() {
        let err = "5".parse::<Pair>().unwrap_err();
        assert_eq!(err, TypeError::MissingToken("value"));
    }

    #[test]
    fn parse_rejects_empty() {
        let err = "".parse::<Pair>().unwrap_err();
        assert_eq!(err, TypeError::MissingToken("key"));
    }

    #[test]
    fn parse_rejects_non_integer() {
        let err = "1 two".parse::<Pair>().unwrap_err();
        assert_eq!(err, TypeError::InvalidInteger("two".into()));
    }

    #[test]
    fn parse_rejects_trailing_token() {
        let err = "1 2 3".parse::<Pair>().unwrap_err();
        assert_eq!(err, TypeError::TrailingToken("3".into()));
    }

    #[test]
    fn ordering_is_key_major() {
        assert!(Pair::new(1, 100) < Pair::new(2, 0));
        assert!(Pair::new(1, 1) < Pair::new(1, 2));
    }

    #[test]
    fn serde_roundtrip() {
        let pair = Pair::new(7, 13);
        let json = serde_json::to_string(&pair).unwrap();
        let parsed: Pair = serde_json::from_str(&json).unwrap();
        assert_eq!(pair, parsed);
    }
}
