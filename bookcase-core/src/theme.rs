//! Light/dark theme preference

use crate::error::PreferenceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour theme
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background
    #[default]
    Day,

    /// Light text on a dark background
    Night,
}

impl Theme {
    /// Decide the theme to display
    ///
    /// An explicit request wins over the stored preference. A host that
    /// prefers a dark colour scheme always gets Night.
    pub fn resolve(requested: Option<Theme>, stored: Option<Theme>, prefers_dark: bool) -> Theme {
        if prefers_dark || requested.or(stored) == Some(Theme::Night) {
            Theme::Night
        } else {
            Theme::Day
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Day => "day",
            Theme::Night => "night",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day" => Ok(Theme::Day),
            "night" => Ok(Theme::Night),
            other => Err(PreferenceError::InvalidTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("day".parse::<Theme>().unwrap(), Theme::Day);
        assert_eq!(" night\n".parse::<Theme>().unwrap(), Theme::Night);
        assert!(matches!(
            "dusk".parse::<Theme>(),
            Err(PreferenceError::InvalidTheme(t)) if t == "dusk"
        ));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(Theme::resolve(None, None, false), Theme::Day);
        assert_eq!(Theme::resolve(None, Some(Theme::Night), false), Theme::Night);
        assert_eq!(Theme::resolve(Some(Theme::Day), Some(Theme::Night), false), Theme::Day);
        assert_eq!(Theme::resolve(Some(Theme::Day), None, true), Theme::Night);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Night).unwrap(), "\"night\"");
        let theme: Theme = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(theme, Theme::Day);
    }
}
