//! Core types for cardfile-core.
//!
//! This module defines the data structures shared across all layers: the
//! unvalidated [`Draft`] a user is still editing, the immutable [`Record`]
//! that lives in the store, and the two repeated-entry types
//! ([`PhoneEntry`], [`AddressEntry`]).
//!
//! Field names serialize in camelCase (`firstName`, `personName`,
//! `addressType`, …) to match the submission JSON produced by the form.

use serde::{Deserialize, Serialize};

/// One phone row on a record: the number and the person it reaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneEntry {
    pub number: String,
    pub person_name: String,
}

/// One address row on a record.
///
/// `address_type` is a free-text label ("India", "USA", "Office", …). It is
/// compared case-sensitively against the configured domestic label when the
/// list view classifies records as domestic or international.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressEntry {
    pub address: String,
    pub address_type: String,
}

/// A validated, immutable submission held in the [`RecordStore`](crate::RecordStore).
///
/// A `Record` is only ever produced by [`validate`](crate::validate), which
/// guarantees the store invariants: all required strings non-empty and both
/// collections holding between 1 and 4 entries. Once stored it is never
/// mutated; reads hand out clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    pub phone: Vec<PhoneEntry>,
    pub address: Vec<AddressEntry>,
    pub remarks: String,
    pub reference: String,
}

impl Record {
    /// The record's top-level scalar text fields, in declaration order.
    ///
    /// Used by the query engine for free-text matching; the nested phone and
    /// address scalars are walked separately.
    pub(crate) fn text_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.remarks.as_str(),
            self.reference.as_str(),
        ]
        .into_iter()
    }
}

/// A user-entered, not-yet-validated candidate record.
///
/// Same shape as [`Record`], but mutable and deserializable from form JSON.
/// Pass it to [`validate`](crate::validate) to turn it into a `Record`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub first_name: String,
    pub last_name: String,
    pub phone: Vec<PhoneEntry>,
    pub address: Vec<AddressEntry>,
    pub remarks: String,
    pub reference: String,
}
