//! Result-limit selector offered to the user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Maximum number of communes kept from a geocoding response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResultLimit {
    #[default]
    One,
    Two,
    Five,
    Ten,
    All,
}

impl ResultLimit {
    pub const CHOICES: [ResultLimit; 5] = [
        ResultLimit::One,
        ResultLimit::Two,
        ResultLimit::Five,
        ResultLimit::Ten,
        ResultLimit::All,
    ];

    /// Upper bound on kept entries, `None` when unbounded.
    pub fn max_entries(self) -> Option<usize> {
        match self {
            ResultLimit::One => Some(1),
            ResultLimit::Two => Some(2),
            ResultLimit::Five => Some(5),
            ResultLimit::Ten => Some(10),
            ResultLimit::All => None,
        }
    }

    /// Truncate `items` to this limit, keeping the original order.
    pub fn truncate<T>(self, mut items: Vec<T>) -> Vec<T> {
        if let Some(max) = self.max_entries() {
            items.truncate(max);
        }
        items
    }
}

impl fmt::Display for ResultLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_entries() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "all"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid result limit '{0}', expected one of 1, 2, 5, 10, all")]
pub struct InvalidLimit(pub String);

impl FromStr for ResultLimit {
    type Err = InvalidLimit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" => Ok(ResultLimit::One),
            "2" => Ok(ResultLimit::Two),
            "5" => Ok(ResultLimit::Five),
            "10" => Ok(ResultLimit::Ten),
            // 1000 was the value behind the "all results" option
            "all" | "1000" => Ok(ResultLimit::All),
            other => Err(InvalidLimit(other.to_string())),
        }
    }
}

impl TryFrom<String> for ResultLimit {
    type Error = InvalidLimit;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResultLimit> for String {
    fn from(limit: ResultLimit) -> Self {
        limit.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;

    #[test]
    fn parses_every_choice() {
        assert_eq!("1".parse::<ResultLimit>().unwrap(), ResultLimit::One);
        assert_eq!("2".parse::<ResultLimit>().unwrap(), ResultLimit::Two);
        assert_eq!("5".parse::<ResultLimit>().unwrap(), ResultLimit::Five);
        assert_eq!(" 10 ".parse::<ResultLimit>().unwrap(), ResultLimit::Ten);
        assert_eq!("ALL".parse::<ResultLimit>().unwrap(), ResultLimit::All);
        assert_eq!("1000".parse::<ResultLimit>().unwrap(), ResultLimit::All);
    }

    #[test]
    fn rejects_values_outside_selector() {
        assert!("3".parse::<ResultLimit>().is_err());
        assert!("".parse::<ResultLimit>().is_err());
        assert!("-1".parse::<ResultLimit>().is_err());
    }

    #[test]
    fn truncate_keeps_prefix_in_order() {
        let items: Vec<u32> = (0..7).collect();
        assert_eq!(ResultLimit::One.truncate(items.clone()), vec![0]);
        assert_eq!(ResultLimit::Five.truncate(items.clone()), vec![0, 1, 2, 3, 4]);
        assert_eq!(ResultLimit::Ten.truncate(items.clone()), items);
        assert_eq!(ResultLimit::All.truncate(items.clone()), items);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for limit in ResultLimit::CHOICES {
            assert_eq!(limit.to_string().parse::<ResultLimit>().unwrap(), limit);
        }
    }
}
