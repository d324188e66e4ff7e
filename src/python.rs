//! Python bindings, built with `--features python`.

use crate::config::Config;
use crate::error::FreqError;
use crate::frequency::{self, FrequencyTable, TieBreak};
use pyo3::prelude::*;
use std::path::PathBuf;

fn to_py_err(err: FreqError) -> PyErr {
    match err {
        FreqError::CorpusNotFound { .. } => {
            pyo3::exceptions::PyFileNotFoundError::new_err(err.to_string())
        }
        _ => pyo3::exceptions::PyIOError::new_err(err.to_string()),
    }
}

/// Token count row returned to Python
#[pyclass]
#[derive(Clone)]
struct TokenCount {
    #[pyo3(get)]
    token: String,
    #[pyo3(get)]
    count: u64,
}

impl From<&frequency::TokenCount> for TokenCount {
    fn from(entry: &frequency::TokenCount) -> Self {
        Self {
            token: entry.token.clone(),
            count: entry.count,
        }
    }
}

/// Ranked frequency table, built once and queried many times
#[pyclass(name = "FrequencyTable")]
struct PyFrequencyTable {
    inner: FrequencyTable,
}

#[pymethods]
impl PyFrequencyTable {
    /// Count of a token (trimmed, lowercased); 0 if absent
    fn lookup(&self, token: &str) -> u64 {
        frequency::lookup(&self.inner, token)
    }

    fn entries(&self) -> Vec<TokenCount> {
        self.inner.entries().iter().map(TokenCount::from).collect()
    }

    fn top(&self, n: usize) -> Vec<TokenCount> {
        self.inner.top(n).iter().map(TokenCount::from).collect()
    }

    fn most_prevalent(&self) -> Option<TokenCount> {
        self.inner.most_prevalent().map(TokenCount::from)
    }

    #[getter]
    fn total_tokens(&self) -> u64 {
        self.inner.total_tokens()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// Summary of a pipeline run
#[pyclass]
#[derive(Clone)]
struct RunSummary {
    #[pyo3(get)]
    corpus_file: String,
    #[pyo3(get)]
    most_prevalent_word: Option<String>,
    #[pyo3(get)]
    most_prevalent_count: u64,
    #[pyo3(get)]
    total_tokens: u64,
    #[pyo3(get)]
    distinct_tokens: usize,
    #[pyo3(get)]
    outputs: Vec<String>,
}

/// Ranked frequency table for a text
#[pyfunction]
#[pyo3(signature = (text, alphabetical=false, normalize=false))]
fn build_frequency_table(text: String, alphabetical: bool, normalize: bool) -> PyFrequencyTable {
    let tie_break = if alphabetical {
        TieBreak::Alphabetical
    } else {
        TieBreak::EncounterOrder
    };
    PyFrequencyTable {
        inner: frequency::build_frequency_table_with(&text, tie_break, normalize),
    }
}

/// Count of a token in a previously built table (0 if absent)
#[pyfunction]
fn lookup(table: PyRef<'_, PyFrequencyTable>, token: &str) -> u64 {
    table.lookup(token)
}

/// Run the full load -> count -> report pipeline
#[pyfunction]
#[pyo3(signature = (project_root=None))]
fn run_pipeline(project_root: Option<String>) -> PyResult<RunSummary> {
    let config = match project_root {
        Some(root) => Config::from_project_root(PathBuf::from(root)),
        None => Config::default(),
    };
    let summary = crate::pipeline::run(&config).map_err(to_py_err)?;
    Ok(RunSummary {
        corpus_file: summary.corpus_file,
        most_prevalent_word: summary.most_prevalent.as_ref().map(|t| t.token.clone()),
        most_prevalent_count: summary.most_prevalent.as_ref().map_or(0, |t| t.count),
        total_tokens: summary.total_tokens,
        distinct_tokens: summary.distinct_tokens,
        outputs: summary
            .outputs
            .iter()
            .map(|p| p.display().to_string())
            .collect(),
    })
}

#[pymodule]
fn corpus_token_freq(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(build_frequency_table, m)?)?;
    m.add_function(wrap_pyfunction!(lookup, m)?)?;
    m.add_function(wrap_pyfunction!(run_pipeline, m)?)?;
    m.add_class::<TokenCount>()?;
    m.add_class::<PyFrequencyTable>()?;
    m.add_class::<RunSummary>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_built_once_and_queried() {
        let table = build_frequency_table("Country matters. Our COUNTRY.".to_string(), false, false);
        assert_eq!(table.lookup(" country "), 2);
        assert_eq!(table.lookup("aids"), 0);
        assert_eq!(table.__len__(), 2);
        assert_eq!(table.total_tokens(), 3);
        let top = table.most_prevalent().unwrap();
        assert_eq!((top.token.as_str(), top.count), ("country", 2));
        assert_eq!(table.top(1).len(), 1);
    }
}
