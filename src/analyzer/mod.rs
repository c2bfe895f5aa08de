// Analyzer module: keyword lexicon, scoring and the categorizer built on them.

pub mod categorizer;
pub mod lexicon;
pub mod scoring;

pub use categorizer::{Categorizer, Classifier};
