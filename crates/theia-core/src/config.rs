//! # Classifier Configuration
//!
//! Controls how [`TitleClassifier::classify`](crate::TitleClassifier::classify)
//! resolves titles that satisfy both the TV and the movie pattern.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TheiaError;

/// Which pattern wins when a title matches both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precedence {
    /// Season/episode markers are more specific than a bare year.
    #[default]
    TvFirst,
    MovieFirst,
}

impl fmt::Display for Precedence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TvFirst => write!(f, "tv"),
            Self::MovieFirst => write!(f, "movie"),
        }
    }
}

impl FromStr for Precedence {
    type Err = TheiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tv" | "episode" | "tvfirst" => Ok(Self::TvFirst),
            "movie" | "moviefirst" => Ok(Self::MovieFirst),
            _ => Err(TheiaError::UnknownPrecedence(s.to_string())),
        }
    }
}

/// Configuration for the classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Tie-break used by `classify`.
    pub precedence: Precedence,
}

impl ClassifierConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tie-break precedence.
    pub fn with_precedence(mut self, precedence: Precedence) -> Self {
        self.precedence = precedence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefers_tv() {
        assert_eq!(ClassifierConfig::new().precedence, Precedence::TvFirst);
    }

    #[test]
    fn builder_sets_precedence() {
        let config = ClassifierConfig::new().with_precedence(Precedence::MovieFirst);
        assert_eq!(config.precedence, Precedence::MovieFirst);
    }

    #[test]
    fn precedence_from_str() {
        assert_eq!("tv".parse::<Precedence>().unwrap(), Precedence::TvFirst);
        assert_eq!(" Movie ".parse::<Precedence>().unwrap(), Precedence::MovieFirst);
        assert!(matches!(
            "both".parse::<Precedence>(),
            Err(TheiaError::UnknownPrecedence(s)) if s == "both"
        ));
    }

    #[test]
    fn precedence_display_parses_back() {
        for p in [Precedence::TvFirst, Precedence::MovieFirst] {
            assert_eq!(p.to_string().parse::<Precedence>().unwrap(), p);
        }
    }
}
