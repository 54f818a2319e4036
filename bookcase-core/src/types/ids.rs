//! Identifier newtypes for catalog lookups

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an author in the author lookup table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

/// Identifier of a genre in the genre lookup table
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenreId(String);

macro_rules! string_id {
    ($name:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(AuthorId);
string_id!(GenreId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&AuthorId::new("austen")).unwrap();
        assert_eq!(json, "\"austen\"");

        let genre: GenreId = serde_json::from_str("\"romance\"").unwrap();
        assert_eq!(genre.as_str(), "romance");
    }
}
