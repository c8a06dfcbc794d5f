//! # Theia Core
//!
//! Recognises media release names as TV episodes or movies and extracts
//! a normalized series/movie name, season and episode numbers or the
//! release year.
//!
//! ## Quick Start
//!
//! ```rust
//! use theia_core::{Classification, TitleClassifier};
//!
//! let classifier = TitleClassifier::new().unwrap();
//!
//! assert!(classifier.matches_tv_episode("some.name.s03e19.hdtv.x264-foo"));
//! assert_eq!(classifier.extract_series_name("some.name.s03e19.hdtv.x264-foo").as_deref(), Some("some name"));
//! assert_eq!(classifier.extract_movie_year("some movie (2016) x264").as_deref(), Some("2016"));
//!
//! match classifier.classify("some.movie.2016.720p.x264") {
//!     Classification::Movie(m) => assert_eq!(m.movie_name, "some movie"),
//!     other => panic!("unexpected {other}"),
//! }
//! ```
//!
//! Extracted names are always lower-cased; callers that display them must
//! restore casing themselves.
pub mod classifier;
pub mod config;
pub mod error;
pub mod types;

// Re-export primary API
pub use classifier::{
    TitleClassifier, classify, extract_episode_number, extract_movie_name, extract_movie_year,
    extract_season_number, extract_series_name, matches_movie, matches_tv_episode,
};
pub use config::{ClassifierConfig, Precedence};
pub use error::{Result, TheiaError};
pub use types::{Classification, MovieMatch, TvMatch};
