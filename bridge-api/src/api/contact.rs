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

//! Contact intake endpoint.
//!
//! Validate, persist, then dispatch notification emails in a detached task.
//! Persistence alone decides the client-visible outcome: once the insert
//! succeeds the response is 200, whatever happens to the emails.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::api::ErrorBody;
use crate::mailer::{Notifier, NotifyOutcome};
use crate::models::ContactSubmission;
use crate::store::SubmissionStore;
use crate::validation::{validate, ContactRequest};

/// Hard ceiling on the detached notification task, on top of the mail
/// client's own timeout. One attempt, no retry.
const NOTIFY_DEADLINE: Duration = Duration::from_secs(15);

const MISSING_FIELDS_ERROR: &str = "Name, email, and message are required";
const PERSISTENCE_ERROR: &str = "Failed to save submission";
const THANK_YOU: &str = "Thank you! Your message has been received.";

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: &'static str,
    pub id: String,
}

/// Dispatch the notification emails on a detached task.
///
/// `deadline` is a hard ceiling on the whole dispatch, on top of the mail
/// client's own timeout; when it elapses the task ends and the outcome is
/// logged. The caller never waits on the returned handle.
pub fn dispatch_notification(
    notifier: Arc<dyn Notifier>,
    submission: ContactSubmission,
    deadline: Duration,
) -> JoinHandle<()> {
    actix_web::rt::spawn(async move {
        match tokio::time::timeout(deadline, notifier.notify(&submission)).await {
            // The mailer logs successful sends itself.
            Ok(NotifyOutcome::Sent) => {}
            Ok(NotifyOutcome::Skipped) => {
                info!("Mail transport not configured, skipping notification")
            }
            Ok(NotifyOutcome::Failed(e)) => error!("Email sending failed: {}", e),
            Err(_) => warn!(
                "Notification for submission '{}' timed out after {:?}",
                submission.id, deadline
            ),
        }
    })
}

/// POST /api/v1/contact
pub async fn submit_contact(
    body: web::Json<ContactRequest>,
    store: web::Data<dyn SubmissionStore>,
    notifier: web::Data<dyn Notifier>,
) -> HttpResponse {
    let request = body.into_inner();

    if let Err(missing) = validate(&request) {
        info!("Rejected contact submission, missing fields: {:?}", missing);
        return HttpResponse::BadRequest().json(ErrorBody::new(MISSING_FIELDS_ERROR));
    }

    let stored = match store.insert(request.into_new_submission()).await {
        Ok(stored) => stored,
        Err(e) => {
            error!("Database error storing contact submission: {}", e);
            return HttpResponse::InternalServerError().json(ErrorBody::new(PERSISTENCE_ERROR));
        }
    };

    // Fire-and-forget: the response never waits on the mail transport.
    dispatch_notification(notifier.into_inner(), stored.clone(), NOTIFY_DEADLINE);

    HttpResponse::Ok().json(SubmitResponse {
        success: true,
        message: THANK_YOU,
        id: stored.id,
    })
}
