//! Token-frequency statistics over a single text corpus.
//!
//! The pipeline loads one text file, tokenizes it (lowercased word runs of
//! three or more characters, English stopwords removed), counts the tokens and
//! writes three CSV reports: the full ranked word list, the top N rows and a
//! lookup table for a fixed set of key tokens.

pub mod config;
pub mod error;
pub mod frequency;
pub mod language;
pub mod loader;
pub mod pipeline;
pub mod report;
pub mod stopwords;
pub mod tokenizer;

#[cfg(feature = "python")]
mod python;

pub use config::Config;
pub use error::{FreqError, Result};
pub use frequency::{
    FrequencyTable, TieBreak, TokenCount, build_frequency_table, build_frequency_table_with,
    lookup,
};
pub use loader::read_corpus;
pub use pipeline::run;
pub use report::{
    LookupRow, RunSummary, emit_console_summary, emit_full_table, emit_key_lookup, emit_top_n,
    key_lookup_rows,
};
