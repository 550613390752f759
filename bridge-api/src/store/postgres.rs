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

use crate::models::{ContactSubmission, NewSubmission, SubmissionStatus};
use crate::store::{StoreError, SubmissionStore};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

/// Postgres-backed submission store.
pub struct PgSubmissionStore {
    pool: PgPool,
}

impl PgSubmissionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubmissionStore for PgSubmissionStore {
    async fn insert(&self, submission: NewSubmission) -> Result<ContactSubmission, StoreError> {
        let id = Uuid::new_v4().to_string();

        let stored = sqlx::query_as::<_, ContactSubmission>(
            r#"
            INSERT INTO contact_submissions
                (id, name, email, phone, company, subject, message, service_interest)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, name, email, phone, company, subject, message,
                      service_interest, status, is_read, created_at
            "#,
        )
        .bind(&id)
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.company)
        .bind(&submission.subject)
        .bind(&submission.message)
        .bind(&submission.service_interest)
        .fetch_one(&self.pool)
        .await?;

        info!("Stored contact submission '{}' from '{}'", stored.id, stored.email);
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let submissions = sqlx::query_as::<_, ContactSubmission>(
            r#"
            SELECT id, name, email, phone, company, subject, message,
                   service_interest, status, is_read, created_at
            FROM contact_submissions
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn update_status(&self, id: &str, status: SubmissionStatus) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE contact_submissions SET status = $2, is_read = TRUE WHERE id = $1",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        info!("Submission '{}' moved to status '{}'", id, status);
        Ok(())
    }

    async fn role_for(&self, email: &str) -> Result<Option<String>, StoreError> {
        let role = sqlx::query_scalar::<_, String>(
            "SELECT role FROM profiles WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(role)
    }
}
