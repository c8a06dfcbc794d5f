use std::fmt;

use serde::{Deserialize, Serialize};

/// A title recognised as a TV episode release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TvMatch {
    /// Normalized series name: dots replaced by spaces, trimmed, lower-case.
    pub series_name: String,
    /// Season number (single digit for compact `SEE` markers).
    pub season: u32,
    /// Episode number within the season.
    pub episode: u32,
}

impl fmt::Display for TvMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} S{:02}E{:02}",
            self.series_name, self.season, self.episode
        )
    }
}

/// A title recognised as a movie release.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieMatch {
    /// Normalized movie name: dots replaced by spaces, trimmed, lower-case.
    pub movie_name: String,
    /// Four-digit release year, kept as written.
    pub year: String,
}

impl fmt::Display for MovieMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.movie_name, self.year)
    }
}

/// Outcome of classifying a single title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Classification {
    Episode(TvMatch),
    Movie(MovieMatch),
    Unknown,
}

impl Classification {
    /// Short lower-case label for the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Episode(_) => "episode",
            Self::Movie(_) => "movie",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    #[must_use]
    pub fn as_episode(&self) -> Option<&TvMatch> {
        match self {
            Self::Episode(m) => Some(m),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_movie(&self) -> Option<&MovieMatch> {
        match self {
            Self::Movie(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Episode(m) => write!(f, "episode: {m}"),
            Self::Movie(m) => write!(f, "movie: {m}"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
