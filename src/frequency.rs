//! Token counting and the ranked frequency table.

use crate::tokenizer::{normalize_text, normalize_token, tokens};
use std::collections::HashMap;

/// Secondary order among tokens with equal counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TieBreak {
    /// First occurrence in the corpus wins.
    #[default]
    #[value(name = "encounter")]
    EncounterOrder,
    /// Lexicographic order of the lowercased token.
    Alphabetical,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCount {
    pub token: String,
    pub count: u64,
}

/// Distinct tokens sorted by count descending. Built once, read-only after.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<TokenCount>,
    index: HashMap<String, usize>,
    total: u64,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[TokenCount] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of tokens that survived filtering (sum of all counts).
    pub fn total_tokens(&self) -> u64 {
        self.total
    }

    /// Highest-ranked row; `None` when nothing survived filtering.
    pub fn most_prevalent(&self) -> Option<&TokenCount> {
        self.entries.first()
    }

    /// The first `n` rows (all of them if the table is shorter).
    pub fn top(&self, n: usize) -> &[TokenCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count for `token` after trimming and lowercasing; 0 when absent.
    pub fn count_of(&self, token: &str) -> u64 {
        let key = normalize_token(token);
        self.index
            .get(&key)
            .map(|&i| self.entries[i].count)
            .unwrap_or(0)
    }
}

/// Build a table with encounter-order ties and no Unicode normalization.
pub fn build_frequency_table(corpus: &str) -> FrequencyTable {
    build_frequency_table_with(corpus, TieBreak::EncounterOrder, false)
}

pub fn build_frequency_table_with(corpus: &str, tie_break: TieBreak, nfc: bool) -> FrequencyTable {
    let normalized = normalize_text(corpus, nfc);

    // Entries are kept in first-seen order until the final sort
    let mut entries: Vec<TokenCount> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut total: u64 = 0;

    for token in tokens(&normalized) {
        total += 1;
        match positions.get(token) {
            Some(&i) => entries[i].count += 1,
            None => {
                positions.insert(token, entries.len());
                entries.push(TokenCount {
                    token: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps encounter order among equal counts
    match tie_break {
        TieBreak::EncounterOrder => entries.sort_by(|a, b| b.count.cmp(&a.count)),
        TieBreak::Alphabetical => {
            entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)))
        }
    }

    let index = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.token.clone(), i))
        .collect();

    tracing::debug!(distinct = entries.len(), total, "Built frequency table");

    FrequencyTable {
        entries,
        index,
        total,
    }
}

/// Count of `token` in `table`. Never fails; absence is a zero count.
pub fn lookup(table: &FrequencyTable, token: &str) -> u64 {
    table.count_of(token)
}
