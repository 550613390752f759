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
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory submission store.
///
/// Backs the server when no `DATABASE_URL` is configured and the test
/// suite. Last write wins on concurrent status updates of the same id,
/// matching the Postgres behavior.
#[derive(Default)]
pub struct MemorySubmissionStore {
    submissions: RwLock<Vec<ContactSubmission>>,
    roles: RwLock<HashMap<String, String>>,
}

impl MemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a profile role, standing in for the `profiles` table.
    pub async fn set_role(&self, email: &str, role: &str) {
        let mut roles = self.roles.write().await;
        roles.insert(email.to_string(), role.to_string());
    }
}

#[async_trait]
impl SubmissionStore for MemorySubmissionStore {
    async fn insert(&self, submission: NewSubmission) -> Result<ContactSubmission, StoreError> {
        let stored = ContactSubmission {
            id: Uuid::new_v4().to_string(),
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            company: submission.company,
            subject: submission.subject,
            message: submission.message,
            service_interest: submission.service_interest,
            status: SubmissionStatus::New.as_str().to_string(),
            is_read: false,
            created_at: Utc::now(),
        };
        let mut submissions = self.submissions.write().await;
        submissions.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        let submissions = self.submissions.read().await;
        let mut all = submissions.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn update_status(&self, id: &str, status: SubmissionStatus) -> Result<(), StoreError> {
        let mut submissions = self.submissions.write().await;
        match submissions.iter_mut().find(|s| s.id == id) {
            Some(s) => {
                s.status = status.as_str().to_string();
                s.is_read = true;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn role_for(&self, email: &str) -> Result<Option<String>, StoreError> {
        let roles = self.roles.read().await;
        Ok(roles.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str) -> NewSubmission {
        NewSubmission {
            name: name.to_string(),
            email: format!("{}@x.com", name),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn insert_assigns_defaults() {
        let store = MemorySubmissionStore::new();
        let stored = store.insert(submission("jane")).await.unwrap();
        assert!(!stored.id.is_empty());
        assert_eq!(stored.status, "new");
        assert!(!stored.is_read);
    }

    #[tokio::test]
    async fn identical_payloads_get_distinct_ids() {
        let store = MemorySubmissionStore::new();
        let a = store.insert(submission("jane")).await.unwrap();
        let b = store.insert(submission("jane")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_all_is_newest_first() {
        let store = MemorySubmissionStore::new();
        for name in ["first", "second", "third"] {
            store.insert(submission(name)).await.unwrap();
            // created_at must strictly increase for the ordering check
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }
        let all = store.list_all().await.unwrap();
        assert_eq!(all[0].name, "third");
        assert_eq!(all[2].name, "first");
        assert!(all[0].created_at >= all[1].created_at);
        assert!(all[1].created_at >= all[2].created_at);
    }

    #[tokio::test]
    async fn update_status_marks_read_and_keeps_immutable_fields() {
        let store = MemorySubmissionStore::new();
        let stored = store.insert(submission("jane")).await.unwrap();

        store
            .update_status(&stored.id, SubmissionStatus::Archived)
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        let updated = all.iter().find(|s| s.id == stored.id).unwrap();
        assert_eq!(updated.status, "archived");
        assert!(updated.is_read);
        assert_eq!(updated.name, stored.name);
        assert_eq!(updated.email, stored.email);
        assert_eq!(updated.message, stored.message);
        assert_eq!(updated.created_at, stored.created_at);
    }

    #[tokio::test]
    async fn update_status_on_unknown_id_is_not_found() {
        let store = MemorySubmissionStore::new();
        let err = store
            .update_status("nonexistent-id", SubmissionStatus::Completed)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn role_lookup() {
        let store = MemorySubmissionStore::new();
        assert_eq!(store.role_for("op@x.com").await.unwrap(), None);
        store.set_role("op@x.com", "admin").await;
        assert_eq!(
            store.role_for("op@x.com").await.unwrap().as_deref(),
            Some("admin")
        );
    }
}
