//! Form validation -- pure logic, no I/O.
//!
//! Every validator takes the raw, untrimmed strings a user is attempting to
//! submit and returns a field-keyed error map. All rules fire independently
//! (no short-circuiting across fields) and a field key is absent exactly when
//! that field is valid. Validators never panic on bad input; an invalid field
//! simply yields a message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::complaint::MAX_IMAGES;

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum trimmed title length for a complaint.
pub const MIN_TITLE_LEN: usize = 5;

/// Minimum trimmed description length for a complaint.
pub const MIN_DESCRIPTION_LEN: usize = 20;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Field-keyed error map
// ---------------------------------------------------------------------------

/// Mapping from form field name to a human-readable validation message.
///
/// Empty if and only if the form is acceptable for submission. Keys are the
/// wire-level field names (`roomNumber`, `hostelBlock`, ...), matching what
/// the client renders inline next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field has a validation message.
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The message for one field, if it failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }
}

// ---------------------------------------------------------------------------
// Complaint submission
// ---------------------------------------------------------------------------

/// Raw complaint-submission payload as entered by the user.
///
/// All fields arrive as plain strings; enum fields are validated by value
/// here and parsed into their typed form only after validation passes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplaintForm {
    pub title: String,
    pub category: String,
    pub priority: String,
    pub hostel_block: String,
    pub room_number: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Validate a candidate complaint submission.
///
/// Rules, evaluated independently per field:
/// - `title`: required, trimmed length >= 5
/// - `category`: must be selected
/// - `hostelBlock`: must be selected
/// - `roomNumber`: required, ASCII digits only
/// - `description`: required, trimmed length >= 20
/// - `images`: at most 5 attachments
pub fn validate_complaint(form: &ComplaintForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let title = form.title.trim();
    if title.is_empty() {
        errors.insert("title", "Title is required");
    } else if title.chars().count() < MIN_TITLE_LEN {
        errors.insert("title", "Title must be at least 5 characters");
    }

    if form.category.is_empty() {
        errors.insert("category", "Please select a category");
    }

    if form.hostel_block.is_empty() {
        errors.insert("hostelBlock", "Please select your hostel block");
    }

    let room = form.room_number.trim();
    if room.is_empty() {
        errors.insert("roomNumber", "Room number is required");
    } else if !is_numeric(room) {
        errors.insert("roomNumber", "Room number must be numeric");
    }

    let description = form.description.trim();
    if description.is_empty() {
        errors.insert("description", "Description is required");
    } else if description.chars().count() < MIN_DESCRIPTION_LEN {
        errors.insert("description", "Description must be at least 20 characters");
    }

    if form.images.len() > MAX_IMAGES {
        errors.insert("images", "You can add up to 5 images");
    }

    errors
}

/// ASCII digits only -- no sign, no decimal point, no Unicode digits.
fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Field-level account validators
// ---------------------------------------------------------------------------

/// Syntactic email check: local part, `@`, domain containing a dot.
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Trimmed name of at least two characters.
pub fn validate_name(value: &str) -> bool {
    value.trim().chars().count() >= 2
}

/// Validate a password against the account policy.
///
/// Policy: at least 6 characters, containing at least one letter and one
/// digit. The empty string fails with a distinct "required" message. The
/// same predicate runs at both signup and login.
pub fn validate_password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".into());
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters".into());
    }
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    if !has_letter || !has_digit {
        return Err("Password must contain at least one letter and one number".into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Signup / login forms
// ---------------------------------------------------------------------------

/// Raw signup payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
    pub hostel_block: String,
    pub room_number: String,
}

/// Raw login payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Validate a signup form.
///
/// Composes the field-level validators; when `role` is `student`, the hostel
/// block and room number become required.
pub fn validate_signup(form: &SignupForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert("name", "Name is required");
    } else if !validate_name(&form.name) {
        errors.insert("name", "Name must be at least 2 characters");
    }

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !validate_email(&form.email) {
        errors.insert("email", "Please enter a valid email");
    }

    if let Err(message) = validate_password(&form.password) {
        errors.insert("password", message);
    }

    if form.confirm_password.is_empty() {
        errors.insert("confirmPassword", "Please confirm your password");
    } else if form.confirm_password != form.password {
        errors.insert("confirmPassword", "Passwords do not match");
    }

    if form.role == "student" {
        if form.hostel_block.trim().is_empty() {
            errors.insert("hostelBlock", "Hostel block is required");
        }
        if form.room_number.trim().is_empty() {
            errors.insert("roomNumber", "Room number is required");
        }
    }

    errors
}

/// Validate a login form.
pub fn validate_login(form: &LoginForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required");
    } else if !validate_email(&form.email) {
        errors.insert("email", "Enter a valid email");
    }

    if let Err(message) = validate_password(&form.password) {
        errors.insert("password", message);
    }

    errors
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
