//! Statute reference entries and the keyword matching rule.
//!
//! Matching is a pure function of (tokens, table): token-overlap scoring
//! against each entry's keyword set, highest score wins, ties broken by
//! table order. Repeated calls with the same inputs always return the same
//! entry.

use std::collections::HashSet;

/// One section of the statute reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatuteEntry {
    /// Section number, e.g. "302"
    pub section: String,
    /// Short title of the section
    pub title: String,
    /// Plain-language description of the offence and its punishment
    pub description: String,
    /// A well-known case citation, when one exists
    pub related_case: Option<String>,
    /// Lowercase keywords the section is matched on
    pub keywords: Vec<String>,
}

/// A fixed, ordered table of statute entries.
///
/// Table order is significant: it is the tie-break rule for equal scores.
#[derive(Debug, Clone)]
pub struct StatuteTable {
    entries: Vec<StatuteEntry>,
}

impl StatuteTable {
    /// Create a table from entries in matching-priority order.
    pub fn new(entries: Vec<StatuteEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the entries in table order.
    pub fn entries(&self) -> impl Iterator<Item = &StatuteEntry> {
        self.entries.iter()
    }

    /// Split free text into lowercase alphanumeric tokens.
    ///
    /// Used as the fallback when the external extractor yields nothing.
    pub fn tokenize(text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect()
    }

    /// Find the entry with the highest token-overlap score.
    ///
    /// The score is the number of entry keywords present in the query token
    /// set (case-insensitive). Entries scoring zero never match; on equal
    /// scores the first entry in table order wins.
    ///
    /// # Returns
    ///
    /// The best-scoring entry, or None when no entry scores above zero
    pub fn best_match(&self, tokens: &[String]) -> Option<&StatuteEntry> {
        let token_set: HashSet<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut best: Option<(&StatuteEntry, usize)> = None;
        for entry in &self.entries {
            let score = entry
                .keywords
                .iter()
                .filter(|keyword| token_set.contains(&keyword.to_lowercase()))
                .count();
            if score == 0 {
                continue;
            }
            // Strict comparison keeps the earliest entry on ties
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((entry, score)),
            }
        }

        best.map(|(entry, _)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(section: &str, keywords: &[&str]) -> StatuteEntry {
        StatuteEntry {
            section: section.to_string(),
            title: format!("Section {section}"),
            description: String::new(),
            related_case: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tokenize_splits_and_lowercases() {
        // when:
        let result = StatuteTable::tokenize("What is the punishment, for THEFT?");

        // then:
        assert_eq!(
            result,
            tokens(&["what", "is", "the", "punishment", "for", "theft"])
        );
    }

    #[test]
    fn test_tokenize_empty_text() {
        // when:
        let result = StatuteTable::tokenize("  ...  ");

        // then:
        assert!(result.is_empty());
    }

    #[test]
    fn test_best_match_highest_overlap_wins() {
        // given: one entry overlaps on two tokens, the other on one
        let table = StatuteTable::new(vec![
            entry("302", &["murder", "homicide"]),
            entry("379", &["theft", "stealing", "stolen"]),
        ]);

        // when:
        let result = table.best_match(&tokens(&["theft", "stolen", "murder"]));

        // then:
        assert_eq!(result.unwrap().section, "379");
    }

    #[test]
    fn test_best_match_tie_breaks_by_table_order() {
        // given: both entries score 1 on the query
        let table = StatuteTable::new(vec![
            entry("406", &["property"]),
            entry("379", &["property"]),
        ]);

        // when:
        let result = table.best_match(&tokens(&["property"]));

        // then: first table entry wins
        assert_eq!(result.unwrap().section, "406");
    }

    #[test]
    fn test_best_match_zero_score_is_no_match() {
        // given:
        let table = StatuteTable::new(vec![entry("379", &["theft"])]);

        // when:
        let result = table.best_match(&tokens(&["xyzzy", "nonsense"]));

        // then:
        assert!(result.is_none());
    }

    #[test]
    fn test_best_match_case_insensitive() {
        // given:
        let table = StatuteTable::new(vec![entry("379", &["theft"])]);

        // when: query tokens arrive uppercased
        let result = table.best_match(&tokens(&["THEFT"]));

        // then:
        assert_eq!(result.unwrap().section, "379");
    }

    #[test]
    fn test_best_match_deterministic() {
        // given:
        let table = StatuteTable::new(vec![
            entry("302", &["murder"]),
            entry("379", &["theft", "punishment"]),
        ]);
        let query = tokens(&["punishment", "theft"]);

        // when: the same query is evaluated repeatedly
        let first = table.best_match(&query).unwrap().section.clone();

        // then: every call returns the same entry
        for _ in 0..10 {
            assert_eq!(table.best_match(&query).unwrap().section, first);
        }
    }

    #[test]
    fn test_best_match_empty_table() {
        // given:
        let table = StatuteTable::new(Vec::new());

        // then:
        assert!(table.is_empty());
        assert!(table.best_match(&tokens(&["theft"])).is_none());
    }
}
