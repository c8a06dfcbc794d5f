use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error, trace};

use crate::config::{ClassifierConfig, Precedence};
use crate::error::Result;
use crate::types::{Classification, MovieMatch, TvMatch};

/// `<name>` `.`|` ` `<sNNeNN | NNN>` (`.`|` `|`-` | end) `<anything>`.
///
/// Letters are matched through explicit ASCII classes so case folding never
/// reaches non-ASCII look-alikes. A bare `720` is accepted as season 7
/// episode 20; the compact form has no way to tell it from a resolution.
///
/// "Any character" excludes every line terminator (`\n`, `\r`, NEL, U+2028,
/// U+2029), not just `\n` as the regex crate's `.` would.
const TV_PATTERN: &str = r"^([^\n\r\x{85}\x{2028}\x{2029}]*?)[. ]([sS][0-9]{2}[eE][0-9]{2}|[1-9][0-9]{2})(?:[. -]|$)[^\n\r\x{85}\x{2028}\x{2029}]*$";

/// `<name>` `.`|` `|`(` `<19NN | 20NN>` (`.`|` `|`)`|`-` | end) `<anything>`.
const MOVIE_PATTERN: &str = r"^([^\n\r\x{85}\x{2028}\x{2029}]*?)[. (]((?:19|20)[0-9]{2})(?:[. )-]|$)[^\n\r\x{85}\x{2028}\x{2029}]*$";

/// Recognises TV episode and movie release names and extracts their parts.
///
/// Both patterns must match the whole title. The name capture is reluctant,
/// so the first marker scanning left to right wins. Nothing here fails at
/// match time: a title that does not fit yields `false` or `None`.
#[derive(Debug, Clone)]
pub struct TitleClassifier {
    config: ClassifierConfig,
    re_tv: Regex,
    re_movie: Regex,
}

impl TitleClassifier {
    /// Constructs a classifier with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `TheiaError::RegexError` if a pattern fails to compile
    /// (should never happen with the static patterns defined here).
    pub fn new() -> Result<Self> {
        Self::with_config(ClassifierConfig::default())
    }

    /// Constructs a classifier with the given configuration.
    ///
    /// # Errors
    ///
    /// Same as [`TitleClassifier::new`].
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        let classifier = Self {
            config,
            re_tv: Regex::new(TV_PATTERN)?,
            re_movie: Regex::new(MOVIE_PATTERN)?,
        };
        debug!(precedence = %classifier.config.precedence, "title classifier ready");
        Ok(classifier)
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Returns `true` if the whole title reads as `<name> <episode-marker> ...`.
    #[must_use]
    pub fn matches_tv_episode(&self, title: &str) -> bool {
        self.re_tv.is_match(title)
    }

    /// Returns `true` if the whole title reads as `<name> <year> ...`.
    #[must_use]
    pub fn matches_movie(&self, title: &str) -> bool {
        self.re_movie.is_match(title)
    }

    /// Series name with dots turned into spaces, trimmed and lower-cased.
    ///
    /// `None` only when the pattern fails or the captured name is empty; a
    /// capture made only of dots or spaces normalizes to `""`.
    pub fn extract_series_name(&self, title: &str) -> Option<String> {
        let (name, _) = self.tv_parts(title)?;
        (!name.is_empty()).then(|| normalize_name(name))
    }

    /// Season number from the episode marker.
    ///
    /// A compact marker such as `302` only carries a single season digit, so
    /// seasons above 9 cannot be expressed that way.
    pub fn extract_season_number(&self, title: &str) -> Option<u32> {
        let (_, marker) = self.tv_parts(title)?;
        split_marker(marker).map(|(season, _)| season)
    }

    /// Episode number from the episode marker.
    pub fn extract_episode_number(&self, title: &str) -> Option<u32> {
        let (_, marker) = self.tv_parts(title)?;
        split_marker(marker).map(|(_, episode)| episode)
    }

    /// Movie name with dots turned into spaces, trimmed and lower-cased.
    ///
    /// Same empty-capture rule as [`TitleClassifier::extract_series_name`].
    pub fn extract_movie_name(&self, title: &str) -> Option<String> {
        let (name, _) = self.movie_parts(title)?;
        (!name.is_empty()).then(|| normalize_name(name))
    }

    /// The four-digit release year as written in the title.
    pub fn extract_movie_year(&self, title: &str) -> Option<String> {
        let (_, year) = self.movie_parts(title)?;
        Some(year.trim().to_string())
    }

    /// Full TV record, or `None` when the pattern fails or the normalized
    /// name is empty.
    pub fn tv_match(&self, title: &str) -> Option<TvMatch> {
        let (name, marker) = self.tv_parts(title)?;
        let (season, episode) = split_marker(marker)?;
        Some(TvMatch {
            series_name: non_empty(normalize_name(name))?,
            season,
            episode,
        })
    }

    /// Full movie record, or `None` when the pattern fails or the normalized
    /// name is empty.
    pub fn movie_match(&self, title: &str) -> Option<MovieMatch> {
        let (name, year) = self.movie_parts(title)?;
        Some(MovieMatch {
            movie_name: non_empty(normalize_name(name))?,
            year: year.trim().to_string(),
        })
    }

    /// Classifies a title, resolving double matches by the configured precedence.
    pub fn classify(&self, title: &str) -> Classification {
        let classification = match self.config.precedence {
            Precedence::TvFirst => self
                .tv_match(title)
                .map(Classification::Episode)
                .or_else(|| self.movie_match(title).map(Classification::Movie)),
            Precedence::MovieFirst => self
                .movie_match(title)
                .map(Classification::Movie)
                .or_else(|| self.tv_match(title).map(Classification::Episode)),
        }
        .unwrap_or(Classification::Unknown);

        trace!(title, kind = classification.kind(), "classified title");
        classification
    }

    /// Classifies the last component of a file or folder path.
    pub fn classify_path(&self, path: &Path) -> Classification {
        match path.file_name() {
            Some(name) => self.classify(&name.to_string_lossy()),
            None => {
                trace!(path = %path.display(), "path has no final component");
                Classification::Unknown
            }
        }
    }

    fn tv_parts<'t>(&self, title: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.re_tv.captures(title)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }

    fn movie_parts<'t>(&self, title: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.re_movie.captures(title)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

/// Splits `sNNeNN` or compact `SEE` into `(season, episode)`.
fn split_marker(marker: &str) -> Option<(u32, u32)> {
    let (season, episode) = if marker.bytes().all(|b| b.is_ascii_digit()) {
        marker.split_at_checked(1)?
    } else {
        marker[1..].split_once(['e', 'E'])?
    };
    Some((season.parse().ok()?, episode.parse().ok()?))
}

fn normalize_name(raw: &str) -> String {
    raw.replace('.', " ").trim().to_lowercase()
}

fn non_empty(name: String) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

static SHARED: LazyLock<Option<TitleClassifier>> = LazyLock::new(|| {
    TitleClassifier::new()
        .inspect_err(|e| error!(error = %e, "failed to build shared title classifier"))
        .ok()
});

fn shared() -> Option<&'static TitleClassifier> {
    SHARED.as_ref()
}

/// See [`TitleClassifier::matches_tv_episode`].
pub fn matches_tv_episode(title: &str) -> bool {
    shared().is_some_and(|c| c.matches_tv_episode(title))
}

/// See [`TitleClassifier::matches_movie`].
pub fn matches_movie(title: &str) -> bool {
    shared().is_some_and(|c| c.matches_movie(title))
}

/// See [`TitleClassifier::extract_series_name`].
pub fn extract_series_name(title: &str) -> Option<String> {
    shared()?.extract_series_name(title)
}

/// See [`TitleClassifier::extract_season_number`].
pub fn extract_season_number(title: &str) -> Option<u32> {
    shared()?.extract_season_number(title)
}

/// See [`TitleClassifier::extract_episode_number`].
pub fn extract_episode_number(title: &str) -> Option<u32> {
    shared()?.extract_episode_number(title)
}

/// See [`TitleClassifier::extract_movie_name`].
pub fn extract_movie_name(title: &str) -> Option<String> {
    shared()?.extract_movie_name(title)
}

/// See [`TitleClassifier::extract_movie_year`].
pub fn extract_movie_year(title: &str) -> Option<String> {
    shared()?.extract_movie_year(title)
}

/// Classifies a title with the default (TV first) precedence.
pub fn classify(title: &str) -> Classification {
    shared().map_or(Classification::Unknown, |c| c.classify(title))
}
