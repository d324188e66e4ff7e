//! Configuration for a token-frequency run.
//!
//! Compile-time defaults are plain constants. A [`Config`] is built once at
//! program entry (from these defaults plus CLI overrides) and passed by
//! reference into the pipeline; nothing reads paths from global state.

use crate::frequency::TieBreak;
use std::path::{Path, PathBuf};

/// Subdirectory of the project root holding the corpus.
pub const DATA_DIR_NAME: &str = "data";

/// Subdirectory of the project root receiving the CSV reports.
pub const OUTPUT_DIR_NAME: &str = "output";

/// Corpus file name. Kept stable so existing data layouts keep working.
pub const CORPUS_FILE_NAME: &str = "presidential_speeches_corpus.txt";

pub const WORDLIST_FILE_NAME: &str = "wordlist_counts.csv";
pub const TOP_N_FILE_NAME: &str = "top20_tokens.csv";
pub const KEY_COUNTS_FILE_NAME: &str = "key_token_counts.csv";

/// Number of rows in the top-N report.
pub const DEFAULT_TOP_N: usize = 20;

/// Minimum token length, in characters.
pub const MIN_TOKEN_CHARS: usize = 3;

/// Number of leading characters handed to language detection.
pub const LANGUAGE_SAMPLE_CHARS: usize = 10_000;

/// Tokens reported individually in the key-count table, in output order.
pub const KEY_TOKENS: [&str; 10] = [
    "education",
    "afghanistan",
    "applause",
    "policy",
    "year",
    "country",
    "cancer",
    "addiction",
    "diabetes",
    "aids",
];

/// Project root used when none is given: the directory this crate was built from.
pub fn default_project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Immutable settings for a single pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    pub top_n: usize,
    pub key_tokens: Vec<String>,
    pub tie_break: TieBreak,
    /// Apply NFC normalization before tokenizing.
    pub normalize: bool,
}

impl Config {
    /// Derive the conventional `data/` and `output/` layout under `root`.
    pub fn from_project_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input_path: root.join(DATA_DIR_NAME).join(CORPUS_FILE_NAME),
            output_dir: root.join(OUTPUT_DIR_NAME),
            top_n: DEFAULT_TOP_N,
            key_tokens: KEY_TOKENS.iter().map(|t| t.to_string()).collect(),
            tie_break: TieBreak::default(),
            normalize: false,
        }
    }

    pub fn with_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn wordlist_path(&self) -> PathBuf {
        self.output_dir.join(WORDLIST_FILE_NAME)
    }

    pub fn top_n_path(&self) -> PathBuf {
        self.output_dir.join(TOP_N_FILE_NAME)
    }

    pub fn key_counts_path(&self) -> PathBuf {
        self.output_dir.join(KEY_COUNTS_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_project_root(default_project_root())
    }
}
