//! Custom serde helpers for CoinGecko wire formats.

/// Deserializes `null` as the type's default.
///
/// CoinGecko sends explicit `null` for many list and string fields
/// (`"categories": null`, `"twitter_screen_name": null`).
/// `#[serde(default)]` alone only covers *missing* keys.
pub mod null_as_default {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Default + Deserialize<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Deserializes a list of nullable strings, dropping nulls and blanks.
///
/// Link arrays come back padded with `""` (`"homepage": ["https://bitcoin.org", "", ""]`).
pub mod non_blank_strings {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Vec<Option<String>>>::deserialize(deserializer)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "super::null_as_default::deserialize")]
        name: String,
        #[serde(default, deserialize_with = "super::non_blank_strings::deserialize")]
        urls: Vec<String>,
    }

    #[test]
    fn test_null_as_default() {
        let p: Probe = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(p.name, "");
        assert!(p.urls.is_empty());
    }

    #[test]
    fn test_non_blank_strings_drops_padding() {
        let p: Probe =
            serde_json::from_str(r#"{"name": "x", "urls": ["https://a.io", "", null, "  "]}"#)
                .unwrap();
        assert_eq!(p.urls, vec!["https://a.io".to_string()]);
    }
}
