//! Query engine — free-text search plus tab classification over the store.
//!
//! Filtering is a stable pass over the record sequence: the output is always
//! a subsequence of the input in the original relative order, and the
//! function is total — any well-formed records in, some subset out.

use std::fmt;
use std::str::FromStr;

use crate::types::Record;

/// Which list-view tab is active.
///
/// `Domestic` and `International` are any-match classifications over a
/// record's address entries, not an exclusive partition: a record carrying
/// both a domestic and a foreign address appears under both tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    All,
    Domestic,
    International,
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::All => write!(f, "all"),
            Tab::Domestic => write!(f, "domestic"),
            Tab::International => write!(f, "international"),
        }
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "domestic" => Ok(Tab::Domestic),
            "international" => Ok(Tab::International),
            other => Err(format!(
                "unknown tab {other:?} (expected all, domestic, or international)"
            )),
        }
    }
}

/// Filters record sequences by search text and active tab.
///
/// Holds the configured domestic label — the address-type string that marks
/// an address as domestic. Comparison against the label is exact and
/// case-sensitive; the free-text search is case-insensitive.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    domestic_label: String,
}

impl QueryEngine {
    pub fn new(domestic_label: impl Into<String>) -> Self {
        Self {
            domestic_label: domestic_label.into(),
        }
    }

    pub fn domestic_label(&self) -> &str {
        &self.domestic_label
    }

    /// Return the records matching `search` under `tab`, preserving the
    /// input's relative order.
    ///
    /// A record matches the search when any of its scalar text values —
    /// the four top-level fields, or the number / person name of any phone
    /// row, or the address / address type of any address row — contains the
    /// query as a case-insensitive substring. The empty query matches
    /// everything. The tab predicate is AND-ed on top.
    pub fn query<'a>(&self, records: &'a [Record], search: &str, tab: Tab) -> Vec<&'a Record> {
        let needle = search.to_lowercase();
        let results: Vec<&Record> = records
            .iter()
            .filter(|record| matches_search(record, &needle) && self.matches_tab(record, tab))
            .collect();
        tracing::debug!(
            total = records.len(),
            matched = results.len(),
            %tab,
            search,
            "query executed"
        );
        results
    }

    fn matches_tab(&self, record: &Record, tab: Tab) -> bool {
        match tab {
            Tab::All => true,
            Tab::Domestic => record
                .address
                .iter()
                .any(|a| a.address_type == self.domestic_label),
            Tab::International => record
                .address
                .iter()
                .any(|a| a.address_type != self.domestic_label),
        }
    }
}

/// Case-insensitive substring match over every scalar text value the record
/// carries. `needle` must already be lowercased.
fn matches_search(record: &Record, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record
        .text_fields()
        .any(|field| field.to_lowercase().contains(needle))
        || record.phone.iter().any(|p| {
            p.number.to_lowercase().contains(needle)
                || p.person_name.to_lowercase().contains(needle)
        })
        || record.address.iter().any(|a| {
            a.address.to_lowercase().contains(needle)
                || a.address_type.to_lowercase().contains(needle)
        })
}
