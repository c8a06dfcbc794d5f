//! Theia title classifier CLI
//!
//! Classifies media file or folder names given as arguments, or one per
//! stdin line, and prints one JSON object per name.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use theia_core::{Classification, ClassifierConfig, Precedence, TitleClassifier};
use tracing::{Level, debug, info};

/// CLI arguments
#[derive(Parser)]
#[command(name = "theia-classify")]
#[command(about = "Classify media release names as TV episodes or movies")]
#[command(version)]
struct Cli {
    /// Pattern to trust when a name looks like both ("tv" or "movie")
    #[arg(short, long, env = "THEIA_PREFER", default_value_t = Precedence::TvFirst)]
    prefer: Precedence,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Names to classify; stdin is read line by line when none are given
    names: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ClassifyOutput<'a> {
    input: &'a str,
    kind: &'static str,
    series_name: Option<&'a str>,
    season: Option<u32>,
    episode: Option<u32>,
    movie_name: Option<&'a str>,
    year: Option<&'a str>,
}

impl<'a> ClassifyOutput<'a> {
    fn new(input: &'a str, classification: &'a Classification) -> Self {
        let tv = classification.as_episode();
        let movie = classification.as_movie();
        Self {
            input,
            kind: classification.kind(),
            series_name: tv.map(|m| m.series_name.as_str()),
            season: tv.map(|m| m.season),
            episode: tv.map(|m| m.episode),
            movie_name: movie.map(|m| m.movie_name.as_str()),
            year: movie.map(|m| m.year.as_str()),
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn emit(classifier: &TitleClassifier, name: &str, out: &mut impl Write) -> Result<()> {
    let classification = classifier.classify(name);
    debug!(name, %classification, "classified");
    let line = serde_json::to_string(&ClassifyOutput::new(name, &classification))
        .context("failed to encode classification")?;
    writeln!(out, "{line}").context("failed to write to stdout")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let config = ClassifierConfig::new().with_precedence(cli.prefer);
    let classifier =
        TitleClassifier::with_config(config).context("failed to build title classifier")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.names.is_empty() {
        info!("reading names from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let name = line.trim();
            if name.is_empty() {
                continue;
            }
            emit(&classifier, name, &mut out)?;
        }
    } else {
        for name in &cli.names {
            emit(&classifier, name, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_prefer_and_names() {
        let cli = Cli::try_parse_from(["theia-classify", "--prefer", "movie", "-vv", "a.s01e01"])
            .unwrap();
        assert_eq!(cli.prefer, Precedence::MovieFirst);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.names, vec!["a.s01e01".to_string()]);
    }

    #[test]
    fn rejects_unknown_precedence() {
        assert!(Cli::try_parse_from(["theia-classify", "--prefer", "both"]).is_err());
    }

    #[test]
    fn emits_one_json_line_per_name() {
        let classifier = TitleClassifier::new().unwrap();
        let mut out = Vec::new();
        emit(&classifier, "some.name.s03e19.hdtv.x264-foo", &mut out).unwrap();
        emit(&classifier, "some movie (2016) x264", &mut out).unwrap();
        emit(&classifier, "holiday.mkv", &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 3);

        assert_eq!(lines[0]["kind"], "episode");
        assert_eq!(lines[0]["series_name"], "some name");
        assert_eq!(lines[0]["season"], 3);
        assert_eq!(lines[0]["episode"], 19);
        assert!(lines[0]["year"].is_null());

        assert_eq!(lines[1]["kind"], "movie");
        assert_eq!(lines[1]["movie_name"], "some movie");
        assert_eq!(lines[1]["year"], "2016");

        assert_eq!(lines[2]["kind"], "unknown");
        assert_eq!(lines[2]["input"], "holiday.mkv");
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(2), Level::DEBUG);
        assert_eq!(log_level(7), Level::TRACE);
    }
}
