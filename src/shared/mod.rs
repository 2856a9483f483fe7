//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format CoinGecko sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for CoinGecko coin identifiers (e.g. `"bitcoin"`, `"usd-coin"`).
///
/// Stable and globally unique; used as the primary key everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl std::borrow::Borrow<str> for CoinId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CoinId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── ChartRange ──────────────────────────────────────────────────────────────

/// Day range of a market chart request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRange {
    #[serde(rename = "1")]
    Day1,
    #[serde(rename = "7")]
    Week1,
    #[serde(rename = "30")]
    Month1,
    #[serde(rename = "90")]
    Month3,
    #[default]
    #[serde(rename = "365")]
    Year1,
    #[serde(rename = "max")]
    Max,
}

impl ChartRange {
    /// Value of the `days` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day1 => "1",
            Self::Week1 => "7",
            Self::Month1 => "30",
            Self::Month3 => "90",
            Self::Year1 => "365",
            Self::Max => "max",
        }
    }

    /// Number of days covered, `None` for the full history.
    pub fn days(&self) -> Option<u32> {
        match self {
            Self::Day1 => Some(1),
            Self::Week1 => Some(7),
            Self::Month1 => Some(30),
            Self::Month3 => Some(90),
            Self::Year1 => Some(365),
            Self::Max => None,
        }
    }

    /// Short button label, e.g. `"7D"`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Day1 => "24H",
            Self::Week1 => "7D",
            Self::Month1 => "30D",
            Self::Month3 => "90D",
            Self::Year1 => "1Y",
            Self::Max => "All",
        }
    }

    pub fn all() -> [ChartRange; 6] {
        [
            Self::Day1,
            Self::Week1,
            Self::Month1,
            Self::Month3,
            Self::Year1,
            Self::Max,
        ]
    }
}

impl std::fmt::Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde() {
        let id = CoinId::from("bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bitcoin\"");
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_coin_id_ordering_is_lexicographic() {
        let mut ids = vec![CoinId::from("solana"), CoinId::from("bitcoin")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "bitcoin");
    }

    #[test]
    fn test_chart_range_serde() {
        let r: ChartRange = serde_json::from_str("\"30\"").unwrap();
        assert_eq!(r, ChartRange::Month1);
        assert_eq!(r.days(), Some(30));
        let max: ChartRange = serde_json::from_str("\"max\"").unwrap();
        assert_eq!(max.days(), None);
    }

    #[test]
    fn test_chart_range_default_is_one_year() {
        assert_eq!(ChartRange::default().as_str(), "365");
        assert_eq!(
            ChartRange::default().days(),
            Some(crate::network::DEFAULT_CHART_DAYS)
        );
    }
}
