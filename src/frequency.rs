//! Frequency table of accepted terms.

use std::collections::HashMap;

use serde::Serialize;

/// A term and how often it was accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// Terms ranked by count, descending; equal counts keep first-appearance order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    entries: Vec<TermCount>,
}

impl FrequencyTable {
    /// All entries in rank order
    pub fn entries(&self) -> &[TermCount] {
        &self.entries
    }

    /// The first `n` entries
    pub fn top(&self, n: usize) -> &[TermCount] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Count of `term`, 0 if absent
    pub fn count(&self, term: &str) -> usize {
        self.entries
            .iter()
            .find(|e| e.term == term)
            .map_or(0, |e| e.count)
    }

    /// Sum of all counts (the length of the source sequence)
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(term, count)` pairs in rank order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|e| (e.term.as_str(), e.count))
    }
}

/// Count each term and rank the result
pub fn aggregate<S: AsRef<str>>(terms: &[S]) -> FrequencyTable {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut entries: Vec<TermCount> = Vec::new();

    for term in terms {
        let term = term.as_ref();
        match index.get(term) {
            Some(&i) => entries[i].count += 1,
            None => {
                index.insert(term, entries.len());
                entries.push(TermCount {
                    term: term.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    FrequencyTable { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_with_stable_ties() {
        let terms = ["delta", "alpha", "beta", "alpha", "gamma", "beta", "alpha"];
        let table = aggregate(&terms);

        let ranked: Vec<(&str, usize)> = table.iter().collect();
        assert_eq!(
            ranked,
            vec![("alpha", 3), ("beta", 2), ("delta", 1), ("gamma", 1)]
        );
    }

    #[test]
    fn test_empty() {
        let table = aggregate::<String>(&[]);
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
        assert!(table.top(20).is_empty());
    }

    #[test]
    fn test_top_and_count() {
        let terms: Vec<String> = ["a", "b", "b", "c"].iter().map(|s| s.to_string()).collect();
        let table = aggregate(&terms);
        assert_eq!(table.top(1)[0].term, "b");
        assert_eq!(table.top(10).len(), 3);
        assert_eq!(table.count("b"), 2);
        assert_eq!(table.count("z"), 0);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_sorted_descending() {
        let terms = ["x", "y", "y", "z", "z", "z", "y", "x", "w"];
        let table = aggregate(&terms);
        let counts: Vec<usize> = table.iter().map(|(_, c)| c).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_serializes_as_list() {
        let table = aggregate(&["a", "a"]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[{"term":"a","count":2}]"#);
    }
}
