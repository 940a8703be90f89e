//! Domain-specific assertion helpers for cardfile harnesses.
//!
//! These wrap plain panics with context-rich failure messages that make it
//! clear which invariant was violated: which field error was expected, or
//! where a query result broke the subsequence guarantee.

use cardfile_core::Record;

// ---------------------------------------------------------------------------
// Field error assertions
// ---------------------------------------------------------------------------

/// Assert that a `ValidationErrors` contains an error at the given field
/// path with the given message.
///
/// ```rust
/// assert_field_error!(errors, FieldPath::PhoneNumber(1), "Phone number is required");
/// ```
macro_rules! assert_field_error {
    ($errors:expr, $field:expr, $message:expr) => {{
        let errors: &cardfile_core::ValidationErrors = &$errors;
        let field: cardfile_core::FieldPath = $field;
        let message: &str = $message;
        match errors.iter().find(|e| e.field == field) {
            Some(e) if e.message == message => {}
            Some(e) => panic!(
                "assert_field_error! failed:\n  field: {}\n  expected message: {:?}\n  actual message:   {:?}",
                field, message, e.message
            ),
            None => panic!(
                "assert_field_error! failed: no error at {}.\n  Reported: {:?}",
                field,
                errors.iter().map(|e| e.to_string()).collect::<Vec<_>>()
            ),
        }
    }};
}
pub(crate) use assert_field_error;

/// Assert that no error is attached to the given field path.
macro_rules! assert_no_field_error {
    ($errors:expr, $field:expr) => {{
        let errors: &cardfile_core::ValidationErrors = &$errors;
        let field: cardfile_core::FieldPath = $field;
        if let Some(e) = errors.iter().find(|e| e.field == field) {
            panic!(
                "assert_no_field_error! failed: unexpected error at {}: {:?}",
                field, e.message
            );
        }
    }};
}
pub(crate) use assert_no_field_error;

// ---------------------------------------------------------------------------
// Query result assertions
// ---------------------------------------------------------------------------

/// Assert that every record in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |r| r.first_name == "Ana");
/// ```
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[&cardfile_core::Record] = &$results;
        let pred = $pred;
        let failing = results.iter().filter(|r| !pred(**r)).count();
        if failing > 0 {
            panic!(
                "assert_results_all! failed: {} of {} records did not satisfy predicate.",
                failing,
                results.len()
            );
        }
    }};
}
pub(crate) use assert_results_all;

// ---------------------------------------------------------------------------
// Order invariant helpers
// ---------------------------------------------------------------------------

/// Assert that `results` is a subsequence of `input`: every result record
/// appears in the input, and results preserve the input's relative order.
pub fn assert_subsequence(results: &[&Record], input: &[Record]) {
    let mut cursor = 0usize;
    for (ri, result) in results.iter().enumerate() {
        let found = input[cursor..].iter().position(|r| r == *result);
        match found {
            Some(offset) => cursor += offset + 1,
            None => panic!(
                "subsequence violated: result #{ri} ({} {}) not found in input after position {cursor}",
                result.first_name, result.last_name
            ),
        }
    }
}

/// Names of the returned records, for compact equality assertions.
pub fn first_names<'a>(results: &[&'a Record]) -> Vec<&'a str> {
    results.iter().map(|r| r.first_name.as_str()).collect()
}
