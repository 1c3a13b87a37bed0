use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

pub const MSG_NOT_BLANK: &str = "must not be blank";
pub const MSG_EMAIL: &str = "must be a well-formed email address";
pub const MSG_UUID: &str = "invalid UUID";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .expect("uuid pattern compiles")
});

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

/// All failing fields of one payload, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.0
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for e in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Field-level constraints of an inbound payload.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn is_well_formed_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Canonical lowercase, hyphenated, 36-character UUID text.
pub(crate) fn is_canonical_uuid(value: &str) -> bool {
    UUID_RE.is_match(value)
}

/// Required name: present and non-blank.
pub(crate) fn check_name(errors: &mut ValidationErrors, name: Option<&str>) {
    if name.map_or(true, is_blank) {
        errors.push("name", MSG_NOT_BLANK);
    }
}

/// Required email: present, non-blank and well-formed.
pub(crate) fn check_email(errors: &mut ValidationErrors, email: Option<&str>) {
    match email {
        Some(email) if !is_blank(email) => {
            if !is_well_formed_email(email) {
                errors.push("email", MSG_EMAIL);
            }
        }
        _ => errors.push("email", MSG_NOT_BLANK),
    }
}

/// Optional email: only the format rule applies.
pub(crate) fn check_optional_email(errors: &mut ValidationErrors, email: Option<&str>) {
    if let Some(email) = email {
        if !is_well_formed_email(email) {
            errors.push("email", MSG_EMAIL);
        }
    }
}

pub(crate) fn check_optional_uuid(errors: &mut ValidationErrors, field: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !is_canonical_uuid(value) {
            errors.push(field, MSG_UUID);
        }
    }
}
