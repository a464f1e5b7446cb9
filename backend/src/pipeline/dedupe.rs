use std::collections::{HashMap, HashSet};

use common::model::cu_tri::CuTri;

/// Outcome of duplicate detection over one batch.
pub struct DedupOutcome {
    /// Indexes into the input slice that survive deduplication, in original
    /// order. For a duplicated email only the first occurrence is kept.
    pub unique_indexes: Vec<usize>,
    /// Lowercased emails that occur more than once. Every occurrence of such
    /// an email is reported to the operator, including the first one that is
    /// kept.
    pub duplicate_emails: HashSet<String>,
}

/// Detect duplicate emails (case-insensitive) within a batch.
///
/// Records with an empty email do not form a duplicate group; the missing
/// email is already reported by the mandatory-field check. First-seen-wins:
/// later occurrences are dropped from the unique set.
pub fn dedupe(records: &[CuTri]) -> DedupOutcome {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for rec in records {
        if rec.email.is_empty() {
            continue;
        }
        *counts.entry(rec.email.to_lowercase()).or_insert(0) += 1;
    }

    let duplicate_emails: HashSet<String> = counts
        .iter()
        .filter(|(_, &n)| n > 1)
        .map(|(email, _)| email.clone())
        .collect();

    let mut seen: HashSet<String> = HashSet::new();
    let mut unique_indexes = Vec::with_capacity(records.len());
    for (idx, rec) in records.iter().enumerate() {
        if rec.email.is_empty() {
            unique_indexes.push(idx);
            continue;
        }
        if seen.insert(rec.email.to_lowercase()) {
            unique_indexes.push(idx);
        }
    }

    DedupOutcome {
        unique_indexes,
        duplicate_emails,
    }
}
