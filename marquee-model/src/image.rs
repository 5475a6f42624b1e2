use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Poster widths published by the catalog's image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PosterSize {
    W92,
    W154,
    /// Thumbnail width used for search candidates
    W185,
    W342,
    #[default]
    W500,
    W780,
    Original,
}

impl PosterSize {
    /// Thumbnail size used in the candidate list.
    pub const fn thumbnail() -> Self {
        Self::W185
    }

    /// Path segment understood by the image CDN (e.g. `w500`).
    pub const fn to_tmdb_param(self) -> &'static str {
        match self {
            PosterSize::W92 => "w92",
            PosterSize::W154 => "w154",
            PosterSize::W185 => "w185",
            PosterSize::W342 => "w342",
            PosterSize::W500 => "w500",
            PosterSize::W780 => "w780",
            PosterSize::Original => "original",
        }
    }

    pub fn width(self) -> Option<u32> {
        match self {
            PosterSize::W92 => Some(92),
            PosterSize::W154 => Some(154),
            PosterSize::W185 => Some(185),
            PosterSize::W342 => Some(342),
            PosterSize::W500 => Some(500),
            PosterSize::W780 => Some(780),
            PosterSize::Original => None,
        }
    }
}

impl Display for PosterSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_tmdb_param())
    }
}

impl FromStr for PosterSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w92" => Ok(PosterSize::W92),
            "w154" => Ok(PosterSize::W154),
            "w185" => Ok(PosterSize::W185),
            "w342" => Ok(PosterSize::W342),
            "w500" => Ok(PosterSize::W500),
            "w780" => Ok(PosterSize::W780),
            "original" => Ok(PosterSize::Original),
            other => Err(format!("unsupported poster size '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cdn_params_case_insensitively() {
        assert_eq!("W342".parse::<PosterSize>(), Ok(PosterSize::W342));
        assert_eq!("original".parse::<PosterSize>(), Ok(PosterSize::Original));
        assert!("w9999".parse::<PosterSize>().is_err());
    }

    #[test]
    fn thumbnail_is_w185() {
        assert_eq!(PosterSize::thumbnail().to_tmdb_param(), "w185");
        assert_eq!(PosterSize::default().width(), Some(500));
    }
}
