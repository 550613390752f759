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
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Submission persistence behind an object-safe trait.
//!
//! Two backends: Postgres for production and an in-memory store used when
//! the server runs without a database (and by the test suite).

pub mod memory;
pub mod postgres;

pub use memory::MemorySubmissionStore;
pub use postgres::PgSubmissionStore;

use crate::models::{ContactSubmission, NewSubmission, SubmissionStatus};
use async_trait::async_trait;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum StoreError {
    /// The referenced submission does not exist.
    NotFound,
    Database(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Submission not found"),
            StoreError::Database(e) => write!(f, "Database error: {}", e),
        }
    }
}

impl Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Database(other.to_string()),
        }
    }
}

#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist a submission in a single write. Assigns `id` and
    /// `created_at`; `status` starts at `new` and `is_read` at false.
    async fn insert(&self, submission: NewSubmission) -> Result<ContactSubmission, StoreError>;

    /// All submissions, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<ContactSubmission>, StoreError>;

    /// Set the status of a submission. Any status update also marks the
    /// submission read. Unknown ids yield [`StoreError::NotFound`].
    async fn update_status(&self, id: &str, status: SubmissionStatus) -> Result<(), StoreError>;

    /// Role recorded in `profiles` for the given user, if any. Consumed by
    /// the admin authorization check.
    async fn role_for(&self, email: &str) -> Result<Option<String>, StoreError>;
}
