//! Substring filtering over the flattened catalog.
//!
//! Matching is literal containment, never fuzzy: an entry is kept when the
//! query occurs in its emoticon text, or (ignoring ASCII case) in any one
//! segment of its category path or of the path's display labels. Results
//! keep catalog order, so category grouping survives filtering.

use crate::catalog::model::FlatEntry;
use crate::nfc_string;

/// The ordered subset of catalog entries matching a query.
///
/// Always a subsequence of the catalog's traversal order, which means the
/// entries are sorted by [`FlatEntry::index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterResult<'a> {
    entries: Vec<&'a FlatEntry>,
}

impl<'a> FilterResult<'a> {
    pub fn entries(&self) -> &[&'a FlatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&'a FlatEntry> {
        self.entries.get(position).copied()
    }

    /// Position of the entry with stable index `index`, if it is present.
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.entries.binary_search_by_key(&index, |e| e.index()).ok()
    }

    /// Splits the result into runs of consecutive entries sharing a category path.
    pub fn groups(&self) -> Vec<Group<'a, '_>> {
        let mut groups = Vec::new();
        let mut start = 0;
        for pos in 1..=self.entries.len() {
            let boundary = pos == self.entries.len()
                || self.entries[pos].path() != self.entries[start].path();
            if boundary {
                groups.push(Group {
                    start,
                    entries: &self.entries[start..pos],
                });
                start = pos;
            }
        }
        groups
    }

    /// Result positions at which a new category group begins.
    pub fn group_starts(&self) -> Vec<usize> {
        self.groups().iter().map(|g| g.start).collect()
    }
}

/// A run of filtered entries that share one category path.
#[derive(Debug, Clone, Copy)]
pub struct Group<'a, 'r> {
    start: usize,
    entries: &'r [&'a FlatEntry],
}

impl<'a> Group<'a, '_> {
    /// Position of the group's first entry within the [`FilterResult`].
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn path(&self) -> &'a [String] {
        self.entries[0].path()
    }

    pub fn entries(&self) -> &[&'a FlatEntry] {
        self.entries
    }
}

/// Returns the entries matching `query`, in their original order.
///
/// The query is trimmed and NFC-normalised first; an empty query keeps every
/// entry. This is a pure function of its arguments.
pub fn filter<'a>(entries: &'a [FlatEntry], query: &str) -> FilterResult<'a> {
    let query = nfc_string(query.trim());
    if query.is_empty() {
        return FilterResult {
            entries: entries.iter().collect(),
        };
    }

    let folded = query.to_ascii_lowercase();
    let matched: Vec<&FlatEntry> = entries
        .iter()
        .filter(|e| matches(e, &query, &folded))
        .collect();

    tracing::debug!(query = %query, matched = matched.len(), total = entries.len(), "filtered catalog");
    FilterResult { entries: matched }
}

fn matches(entry: &FlatEntry, query: &str, folded: &str) -> bool {
    entry.text().contains(query)
        || entry.folded_path().iter().any(|seg| seg.contains(folded))
        || entry.folded_labels().iter().any(|label| label.contains(folded))
}
