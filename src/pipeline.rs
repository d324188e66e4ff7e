use crate::config::Config;
use crate::error::{FreqError, Result};
use crate::frequency::build_frequency_table_with;
use crate::language::check_corpus_language;
use crate::loader::read_corpus;
use crate::report::{RunSummary, emit_full_table, emit_key_lookup, emit_top_n};
use std::fs;

/// Load, count and write all three reports.
///
/// The corpus is read before anything touches the output directory, so a
/// missing input leaves the filesystem untouched.
pub fn run(config: &Config) -> Result<RunSummary> {
    let corpus = read_corpus(&config.input_path)?;
    let language = check_corpus_language(&corpus);

    let table = build_frequency_table_with(&corpus, config.tie_break, config.normalize);
    drop(corpus);

    fs::create_dir_all(&config.output_dir).map_err(|e| FreqError::io(&config.output_dir, e))?;

    let wordlist_path = config.wordlist_path();
    let top_n_path = config.top_n_path();
    let key_counts_path = config.key_counts_path();

    emit_full_table(&table, &wordlist_path)?;
    emit_top_n(&table, config.top_n, &top_n_path)?;
    emit_key_lookup(&table, config.key_tokens.as_slice(), &key_counts_path)?;

    let most_prevalent = table.most_prevalent().cloned();
    if let Some(top) = &most_prevalent {
        tracing::info!(
            "Counted {} tokens ({} distinct); most prevalent '{}' ({})",
            table.total_tokens(),
            table.len(),
            top.token,
            top.count
        );
    }

    let corpus_file = config
        .input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.input_path.display().to_string());

    Ok(RunSummary {
        corpus_file,
        most_prevalent,
        total_tokens: table.total_tokens(),
        distinct_tokens: table.len(),
        language,
        output_dir: config.output_dir.clone(),
        outputs: vec![wordlist_path, top_n_path, key_counts_path],
    })
}
