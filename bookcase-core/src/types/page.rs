//! Page size configuration value

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Number of books shown per page (never zero)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Batch size of the bundled dataset
    pub const DEFAULT: PageSize = match NonZeroUsize::new(36) {
        Some(n) => PageSize(n),
        None => unreachable!(),
    };

    /// Returns `None` for zero
    pub fn new(size: usize) -> Option<Self> {
        NonZeroUsize::new(size).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: usize = s
            .trim()
            .parse()
            .map_err(|_| format!("'{}' is not a valid number", s))?;
        Self::new(n).ok_or_else(|| "page size must be at least 1".to_string())
    }
}
