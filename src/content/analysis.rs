use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt,
};

use crate::content::model::AtomFeed;

/// Jaccard similarity above which two atoms count as near duplicates.
pub const NEAR_DUPLICATE_THRESHOLD: f64 = 0.8;
/// Atoms with fewer words than this are flagged as very short.
pub const SHORT_ATOM_WORDS: usize = 5;
/// Atoms with more words than this are flagged as very long.
pub const LONG_ATOM_WORDS: usize = 50;

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct DuplicateGroup {
    pub content: String,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NearDuplicate {
    pub first: String,
    pub second: String,
    pub similarity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ReadTimeStats {
    pub average_sec: f64,
    pub max_sec: f64,
    pub min_sec: f64,
}

/// Quality heuristics over every atom of a feed, including types that have no card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FeedReport {
    pub total: usize,
    /// Count per type label as written in the feed.
    pub by_type: BTreeMap<String, usize>,
    pub exact_duplicates: Vec<DuplicateGroup>,
    pub near_duplicates: Vec<NearDuplicate>,
    pub read_time: Option<ReadTimeStats>,
    pub very_short: usize,
    pub very_long: usize,
}

/// Lowercased `\w+` tokens.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Word-set Jaccard similarity; zero when either side has no tokens.
pub fn jaccard_similarity(a: &str, b: &str) -> f64 {
    let ta = tokenize(a);
    let tb = tokenize(b);
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    let inter = ta.intersection(&tb).count();
    let union = ta.union(&tb).count();
    inter as f64 / union as f64
}

impl FeedReport {
    #[tracing::instrument(skip(feed), fields(atoms = feed.entries.len()))]
    pub fn analyze(feed: &AtomFeed) -> Self {
        let contents: Vec<String> = feed.entries.iter().map(|a| a.content.clone()).collect();

        let mut by_type = BTreeMap::new();
        for atom in &feed.entries {
            *by_type.entry(atom.atom_type.clone()).or_insert(0) += 1;
        }

        Self {
            total: feed.entries.len(),
            by_type,
            exact_duplicates: exact_duplicates(&contents),
            near_duplicates: near_duplicates(&contents),
            read_time: read_time_stats(feed.entries.iter().map(|a| a.estimated_read_time_sec)),
            very_short: contents
                .iter()
                .filter(|c| c.split_whitespace().count() < SHORT_ATOM_WORDS)
                .count(),
            very_long: contents
                .iter()
                .filter(|c| c.split_whitespace().count() > LONG_ATOM_WORDS)
                .count(),
        }
    }
}

fn exact_duplicates(contents: &[String]) -> Vec<DuplicateGroup> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    for c in contents {
        let n = counts.entry(c.as_str()).or_insert(0);
        if *n == 0 {
            first_seen.push(c.as_str());
        }
        *n += 1;
    }
    first_seen
        .into_iter()
        .filter_map(|c| {
            let count = counts[c];
            (count > 1).then(|| DuplicateGroup {
                content: c.to_string(),
                count,
            })
        })
        .collect()
}

// Once an item is matched as a duplicate of an earlier one it is not compared again.
fn near_duplicates(contents: &[String]) -> Vec<NearDuplicate> {
    let mut seen = BTreeSet::new();
    let mut out = Vec::new();
    for i in 0..contents.len() {
        for j in (i + 1)..contents.len() {
            if seen.contains(&i) || seen.contains(&j) {
                continue;
            }
            let similarity = jaccard_similarity(&contents[i], &contents[j]);
            if similarity > NEAR_DUPLICATE_THRESHOLD {
                out.push(NearDuplicate {
                    first: contents[i].clone(),
                    second: contents[j].clone(),
                    similarity,
                });
                seen.insert(j);
            }
        }
    }
    out
}

fn read_time_stats(times: impl Iterator<Item = f64>) -> Option<ReadTimeStats> {
    let mut n = 0usize;
    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for t in times {
        n += 1;
        sum += t;
        max = max.max(t);
        min = min.min(t);
    }
    (n > 0).then(|| ReadTimeStats {
        average_sec: sum / n as f64,
        max_sec: max,
        min_sec: min,
    })
}

fn preview(s: &str, chars: usize) -> String {
    s.chars().take(chars).collect()
}

impl fmt::Display for FeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Atoms: {}", self.total)?;

        writeln!(f, "\nAtom Types:")?;
        for (t, c) in &self.by_type {
            writeln!(f, "  - {t}: {c}")?;
        }

        writeln!(f, "\nExact Duplicates: {}", self.exact_duplicates.len())?;
        for d in &self.exact_duplicates {
            writeln!(f, "  - {}...", preview(&d.content, 50))?;
        }

        writeln!(
            f,
            "\nNear Duplicates (Jaccard > {NEAR_DUPLICATE_THRESHOLD}):"
        )?;
        if self.near_duplicates.is_empty() {
            writeln!(f, "  None found.")?;
        }
        for d in &self.near_duplicates {
            writeln!(
                f,
                "  - [{:.2}] '{}...' vs '{}...'",
                d.similarity,
                preview(&d.first, 30),
                preview(&d.second, 30)
            )?;
        }

        if let Some(rt) = self.read_time {
            writeln!(f, "\nAverage Read Time: {:.2} sec", rt.average_sec)?;
            writeln!(f, "Max Read Time: {} sec", rt.max_sec)?;
            writeln!(f, "Min Read Time: {} sec", rt.min_sec)?;
        }

        writeln!(f, "\nQuality Heuristics:")?;
        writeln!(
            f,
            "  - Very short atoms (< {SHORT_ATOM_WORDS} words): {}",
            self.very_short
        )?;
        write!(
            f,
            "  - Very long atoms (> {LONG_ATOM_WORDS} words): {}",
            self.very_long
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/analysis.rs"]
mod tests;
