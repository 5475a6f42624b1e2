use std::fmt;
use std::str::FromStr;

/// How a search result becomes the selected movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SelectionMode {
    /// The top candidate is chosen as soon as results arrive.
    Implicit,
    /// Nothing is fetched until a candidate is picked.
    #[default]
    Explicit,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Implicit => f.write_str("implicit"),
            SelectionMode::Explicit => f.write_str("explicit"),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "implicit" | "auto" => Ok(SelectionMode::Implicit),
            "explicit" | "manual" => Ok(SelectionMode::Explicit),
            other => Err(format!("unknown selection mode '{other}'")),
        }
    }
}
