//! Field validation for intern records.
//!
//! Every field is checked on every call; the result holds at most one
//! message per field, the first rule that field failed.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::codec::parse_local_date;
use crate::model::{Field, InternRecord};

pub const REQUIRED: &str = "This field is required";
pub const EMAIL_NOT_CORRECT: &str = "The email is not correct";
pub const DATE_NOT_CORRECT: &str = "This date is not correct";

/// Per-field error messages. Empty means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Record a message unless the field already has one.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Check a display-encoded record against the form rules.
pub fn validate(record: &InternRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(message) = check_name(&record.name) {
        errors.add(Field::Name, message);
    }
    if let Some(message) = check_email(&record.email) {
        errors.add(Field::Email, message);
    }

    let start = parse_local_date(&record.internship_start);
    if start.is_none() {
        errors.add(Field::InternshipStart, REQUIRED);
    }

    match parse_local_date(&record.internship_end) {
        None => errors.add(Field::InternshipEnd, REQUIRED),
        Some(end) => {
            if let Some(start) = start
                && end <= start
            {
                errors.add(Field::InternshipEnd, DATE_NOT_CORRECT);
            }
        }
    }

    errors
}

fn check_name(name: &str) -> Option<&'static str> {
    name.is_empty().then_some(REQUIRED)
}

fn check_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        return Some(REQUIRED);
    }
    (!is_valid_email(email)).then_some(EMAIL_NOT_CORRECT)
}

static LOCAL_PART_RE: OnceLock<Regex> = OnceLock::new();
static DOMAIN_LABEL_RE: OnceLock<Regex> = OnceLock::new();
static TOP_LABEL_RE: OnceLock<Regex> = OnceLock::new();

// atext plus any non-ASCII character, dot-separated
fn local_part_regex() -> &'static Regex {
    LOCAL_PART_RE.get_or_init(|| {
        Regex::new(
            r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{80}-\x{10FFFF}]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\-\x{80}-\x{10FFFF}]+)*$",
        )
        .unwrap_or_else(|error| panic!("email local part regex failed to compile: {error}"))
    })
}

fn domain_label_regex() -> &'static Regex {
    DOMAIN_LABEL_RE.get_or_init(|| {
        Regex::new(r"^[\p{L}\p{N}]([\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?$")
            .unwrap_or_else(|error| panic!("email domain regex failed to compile: {error}"))
    })
}

fn top_label_regex() -> &'static Regex {
    TOP_LABEL_RE.get_or_init(|| {
        Regex::new(r"^\p{L}([\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?$")
            .unwrap_or_else(|error| panic!("email top label regex failed to compile: {error}"))
    })
}

/// Address syntax without a top-level-domain allow-list: any domain with at
/// least two labels is accepted as long as the last one starts with a letter.
/// Internationalized local parts and domain labels are allowed.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.len() > 64 || domain.len() > 253 {
        return false;
    }
    if !local_part_regex().is_match(local) {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((top, rest)) = labels.split_last() else {
        return false;
    };
    !rest.is_empty()
        && top_label_regex().is_match(top)
        && rest.iter().all(|label| domain_label_regex().is_match(label))
}
