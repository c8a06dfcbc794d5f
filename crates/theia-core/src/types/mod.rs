pub mod matches;

pub use matches::{Classification, MovieMatch, TvMatch};
