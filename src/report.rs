//! CSV reports and the console summary.

use crate::error::{FreqError, Result};
use crate::frequency::{FrequencyTable, TokenCount, lookup};
use crate::language::DetectedLanguage;
use crate::tokenizer::normalize_token;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub const MOST_PREVALENT_ITEM: &str = "most_prevalent_word";

/// One row of the key-token report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    pub item: String,
    pub value: String,
    pub count: u64,
}

/// Rows for the key-token report: the most prevalent token, then one row per
/// requested token in the given order.
///
/// An empty table has no most prevalent token; that row is emitted with an
/// empty value and a zero count.
pub fn key_lookup_rows<S: AsRef<str>>(table: &FrequencyTable, tokens: &[S]) -> Vec<LookupRow> {
    let mut rows = Vec::with_capacity(tokens.len() + 1);

    let top = match table.most_prevalent() {
        Some(top) => LookupRow {
            item: MOST_PREVALENT_ITEM.to_string(),
            value: top.token.clone(),
            count: top.count,
        },
        None => {
            tracing::warn!("Frequency table is empty; writing an empty most_prevalent_word row");
            LookupRow {
                item: MOST_PREVALENT_ITEM.to_string(),
                value: String::new(),
                count: 0,
            }
        }
    };
    rows.push(top);

    for token in tokens {
        let token = normalize_token(token.as_ref());
        rows.push(LookupRow {
            item: format!("token_{}", token),
            count: lookup(table, &token),
            value: token,
        });
    }
    rows
}

// =============================================================================
// Writers
// =============================================================================

/// Write `word,count` rows to any writer.
pub fn write_counts<W: Write>(rows: &[TokenCount], writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["word", "count"])?;
    for row in rows {
        wtr.write_record([row.token.as_str(), row.count.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `item,value,count` rows to any writer.
pub fn write_lookup_rows<W: Write>(rows: &[LookupRow], writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["item", "value", "count"])?;
    for row in rows {
        wtr.write_record([
            row.item.as_str(),
            row.value.as_str(),
            row.count.to_string().as_str(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> csv::Result<()>,
{
    let mut file = File::create(path).map_err(|e| FreqError::io(path, e))?;
    write(&mut file).map_err(|e| FreqError::csv(path, e))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Full table, `word,count`, in table order.
pub fn emit_full_table(table: &FrequencyTable, path: &Path) -> Result<()> {
    write_file(path, |f| write_counts(table.entries(), f))
}

/// First `n` rows of the table; fewer if the table is shorter.
pub fn emit_top_n(table: &FrequencyTable, n: usize, path: &Path) -> Result<()> {
    write_file(path, |f| write_counts(table.top(n), f))
}

/// Key-token lookup table, `item,value,count`.
pub fn emit_key_lookup<S: AsRef<str>>(
    table: &FrequencyTable,
    tokens: &[S],
    path: &Path,
) -> Result<()> {
    let rows = key_lookup_rows(table, tokens);
    write_file(path, |f| write_lookup_rows(&rows, f))
}

// =============================================================================
// Console summary
// =============================================================================

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub corpus_file: String,
    pub most_prevalent: Option<TokenCount>,
    pub total_tokens: u64,
    pub distinct_tokens: usize,
    pub language: Option<DetectedLanguage>,
    pub output_dir: PathBuf,
    pub outputs: Vec<PathBuf>,
}

pub fn emit_console_summary<W: Write>(summary: &RunSummary, out: &mut W) -> io::Result<()> {
    writeln!(out, "=== NLP Preprocessing — Token Frequency Summary ===")?;
    writeln!(out, "Corpus file: {}", summary.corpus_file)?;
    match &summary.most_prevalent {
        Some(top) => writeln!(out, "Most prevalent token: {} ({})", top.token, top.count)?,
        None => writeln!(out, "Most prevalent token: (none)")?,
    }
    writeln!(
        out,
        "Tokens counted: {} ({} distinct)",
        summary.total_tokens, summary.distinct_tokens
    )?;
    writeln!(out)?;
    writeln!(out, "Files written to {}:", summary.output_dir.display())?;
    for path in &summary.outputs {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KEY_COUNTS_FILE_NAME, TOP_N_FILE_NAME, WORDLIST_FILE_NAME};
    use crate::frequency::build_frequency_table;

    fn render_counts(rows: &[TokenCount]) -> String {
        let mut buf = Vec::new();
        write_counts(rows, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_counts_csv() {
        let table = build_frequency_table("The Cat sat. The cat SAT on the mat.");
        assert_eq!(render_counts(table.entries()), "word,count\ncat,2\nsat,2\nmat,1\n");
        assert_eq!(render_counts(table.top(1)), "word,count\ncat,2\n");
    }

    #[test]
    fn test_empty_counts_csv_is_header_only() {
        let table = build_frequency_table("");
        assert_eq!(render_counts(table.top(20)), "word,count\n");
    }

    #[test]
    fn test_key_lookup_rows() {
        let table = build_frequency_table("Applause. Our country, our policy. Applause!");
        let rows = key_lookup_rows(&table, &["applause", "Country", "diabetes"]);
        assert_eq!(rows.len(), 4);
        assert_eq!(
            rows[0],
            LookupRow {
                item: "most_prevalent_word".into(),
                value: "applause".into(),
                count: 2
            }
        );
        assert_eq!(rows[2].item, "token_country");
        assert_eq!(rows[2].value, "country");
        assert_eq!(rows[2].count, 1);
        assert_eq!(rows[3].item, "token_diabetes");
        assert_eq!(rows[3].count, 0);
    }

    #[test]
    fn test_key_lookup_on_empty_table() {
        let table = build_frequency_table("a an the");
        let rows = key_lookup_rows(&table, &["year"]);
        assert_eq!(rows[0].item, MOST_PREVALENT_ITEM);
        assert_eq!(rows[0].value, "");
        assert_eq!(rows[0].count, 0);

        let mut buf = Vec::new();
        write_lookup_rows(&rows, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "item,value,count\nmost_prevalent_word,,0\ntoken_year,year,0\n"
        );
    }

    #[test]
    fn test_console_summary() {
        let summary = RunSummary {
            corpus_file: "presidential_speeches_corpus.txt".into(),
            most_prevalent: Some(TokenCount {
                token: "america".into(),
                count: 42,
            }),
            total_tokens: 100,
            distinct_tokens: 30,
            language: None,
            output_dir: PathBuf::from("out"),
            outputs: [WORDLIST_FILE_NAME, TOP_N_FILE_NAME, KEY_COUNTS_FILE_NAME]
                .iter()
                .map(|n| PathBuf::from("out").join(n))
                .collect(),
        };
        let mut buf = Vec::new();
        emit_console_summary(&summary, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Corpus file: presidential_speeches_corpus.txt"));
        assert!(text.contains("Most prevalent token: america (42)"));
        assert!(text.contains(" - wordlist_counts.csv"));
        assert!(text.contains(" - top20_tokens.csv"));
        assert!(text.contains(" - key_token_counts.csv"));
    }

    #[test]
    fn test_console_summary_without_tokens() {
        let summary = RunSummary {
            corpus_file: "c.txt".into(),
            most_prevalent: None,
            total_tokens: 0,
            distinct_tokens: 0,
            language: None,
            output_dir: PathBuf::from("out"),
            outputs: Vec::new(),
        };
        let mut buf = Vec::new();
        emit_console_summary(&summary, &mut buf).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("Most prevalent token: (none)"));
    }
}
