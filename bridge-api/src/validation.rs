/*
 * Copyright 2025 DigitalBridge
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Required-field validation for contact submissions.
//!
//! Runs at the intake endpoint regardless of any client-side check. A field
//! is missing when it is absent or the empty string; values are NOT trimmed,
//! so whitespace-only input counts as present. Changing that would change
//! observable behavior the site relies on.

use crate::models::NewSubmission;
use serde::Deserialize;

/// Raw intake payload. Every field is optional at the wire level so a
/// missing required field reaches the validator instead of failing JSON
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub service_interest: Option<String>,
}

impl ContactRequest {
    /// Convert into the insert payload. Call only after [`validate`] passed.
    pub fn into_new_submission(self) -> NewSubmission {
        NewSubmission {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone,
            company: self.company,
            subject: self.subject,
            message: self.message.unwrap_or_default(),
            service_interest: self.service_interest,
        }
    }
}

fn present(value: &Option<String>) -> bool {
    matches!(value, Some(v) if !v.is_empty())
}

/// Check the three required fields, returning the names of the missing ones.
pub fn validate(payload: &ContactRequest) -> Result<(), Vec<&'static str>> {
    let mut missing = Vec::new();
    if !present(&payload.name) {
        missing.push("name");
    }
    if !present(&payload.email) {
        missing.push("email");
    }
    if !present(&payload.message) {
        missing.push("message");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
