//! Validator — turns a [`Draft`] into an immutable [`Record`].
//!
//! All rules are checked on every call and every violation is reported, so a
//! form can surface the complete set of problems at once instead of making
//! the user fix them one round-trip at a time. Values are validated verbatim:
//! no trimming or case folding happens here, and a draft that passes moves
//! into the [`Record`] unchanged.

use std::fmt;

use crate::types::{Draft, Record};

/// Inclusive upper bound on phone entries per record.
pub const MAX_PHONES: usize = 4;
/// Inclusive upper bound on address entries per record.
pub const MAX_ADDRESSES: usize = 4;

/// Location of a failed validation rule within the draft.
///
/// Element variants carry the zero-based row index so a form can attach the
/// error to the right input. `Display` renders the form's field names:
/// `firstName`, `phone`, `phone[2].number`, `address[0].addressType`, …
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    FirstName,
    LastName,
    /// The phone collection itself (length rules).
    Phone,
    PhoneNumber(usize),
    PhonePersonName(usize),
    /// The address collection itself (length rules).
    Address,
    AddressLine(usize),
    AddressType(usize),
    Remarks,
    Reference,
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::FirstName => write!(f, "firstName"),
            FieldPath::LastName => write!(f, "lastName"),
            FieldPath::Phone => write!(f, "phone"),
            FieldPath::PhoneNumber(i) => write!(f, "phone[{i}].number"),
            FieldPath::PhonePersonName(i) => write!(f, "phone[{i}].personName"),
            FieldPath::Address => write!(f, "address"),
            FieldPath::AddressLine(i) => write!(f, "address[{i}].address"),
            FieldPath::AddressType(i) => write!(f, "address[{i}].addressType"),
            FieldPath::Remarks => write!(f, "remarks"),
            FieldPath::Reference => write!(f, "reference"),
        }
    }
}

/// One failed validation rule: where it failed and the message to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldPath,
    pub message: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The full, ordered set of rules a draft violated.
///
/// Errors appear in field declaration order: name fields, then the phone
/// rules (length first, then per-row in index order), then the address rules,
/// then remarks and reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("draft failed validation with {} error(s)", errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// True if any error is attached to the given field path.
    pub fn has(&self, field: FieldPath) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

/// Validate a draft, returning the immutable [`Record`] on success or the
/// complete ordered set of violations on failure.
///
/// Required-field checks test for the empty string only; whitespace-only
/// values pass. Collection bounds are `1..=4` for both phones and addresses.
pub fn validate(draft: Draft) -> Result<Record, ValidationErrors> {
    let mut errors = Vec::new();
    let mut push = |field: FieldPath, message: &'static str| {
        errors.push(FieldError { field, message });
    };

    if draft.first_name.is_empty() {
        push(FieldPath::FirstName, "First name is required");
    }
    if draft.last_name.is_empty() {
        push(FieldPath::LastName, "Last name is required");
    }

    if draft.phone.is_empty() {
        push(FieldPath::Phone, "At least one phone is required");
    } else if draft.phone.len() > MAX_PHONES {
        push(FieldPath::Phone, "Maximum 4 phones allowed");
    }
    for (i, entry) in draft.phone.iter().enumerate() {
        if entry.number.is_empty() {
            push(FieldPath::PhoneNumber(i), "Phone number is required");
        }
        if entry.person_name.is_empty() {
            push(FieldPath::PhonePersonName(i), "Person name is required");
        }
    }

    if draft.address.is_empty() {
        push(FieldPath::Address, "At least one address is required");
    } else if draft.address.len() > MAX_ADDRESSES {
        push(FieldPath::Address, "Maximum 4 addresses allowed");
    }
    for (i, entry) in draft.address.iter().enumerate() {
        if entry.address.is_empty() {
            push(FieldPath::AddressLine(i), "Address is required");
        }
        if entry.address_type.is_empty() {
            push(FieldPath::AddressType(i), "Address type is required");
        }
    }

    if draft.remarks.is_empty() {
        push(FieldPath::Remarks, "Remarks are required");
    }
    if draft.reference.is_empty() {
        push(FieldPath::Reference, "Reference is required");
    }

    if !errors.is_empty() {
        return Err(ValidationErrors { errors });
    }

    Ok(Record {
        first_name: draft.first_name,
        last_name: draft.last_name,
        phone: draft.phone,
        address: draft.address,
        remarks: draft.remarks,
        reference: draft.reference,
    })
}
