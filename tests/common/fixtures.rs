//! Static draft corpora used across harnesses.
//!
//! `DRAFTS_JSON` mirrors the wire shape the form submits: camelCase keys,
//! nested phone and address arrays. Parsing it in a harness exercises the
//! same deserialization path the composition root uses.

use cardfile_core::{Draft, Record};

use super::builders::build_record;

/// Four drafts in submission JSON: two valid (one domestic, one
/// international), one with several missing fields, one with an empty
/// phone list.
pub const DRAFTS_JSON: &str = r#"[
  {
    "firstName": "Ana",
    "lastName": "Lee",
    "phone": [{ "number": "555", "personName": "Ana" }],
    "address": [{ "address": "1 Main St", "addressType": "India" }],
    "remarks": "vip",
    "reference": "ref1"
  },
  {
    "firstName": "Bruno",
    "lastName": "Costa",
    "phone": [
      { "number": "030-555-0188", "personName": "Bruno" },
      { "number": "030-555-0199", "personName": "Marta" }
    ],
    "address": [{ "address": "7 Unter den Linden", "addressType": "Germany" }],
    "remarks": "prefers email",
    "reference": "website"
  },
  {
    "firstName": "",
    "lastName": "",
    "phone": [{ "number": "", "personName": "Nadia" }],
    "address": [{ "address": "9 Harbor Rd", "addressType": "" }],
    "remarks": "",
    "reference": "fair"
  },
  {
    "firstName": "Dev",
    "lastName": "Patel",
    "phone": [],
    "address": [{ "address": "12 MG Road", "addressType": "India" }],
    "remarks": "callback",
    "reference": "ref9"
  }
]"#;

/// Parse [`DRAFTS_JSON`] into drafts.
pub fn sample_drafts() -> Vec<Draft> {
    serde_json::from_str(DRAFTS_JSON).expect("fixture JSON must parse")
}

/// The canonical sample record: Ana Lee, one phone, one domestic address at
/// "1 Main St".
pub fn ana_lee() -> Record {
    build_record(sample_drafts().remove(0))
}
