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

//! Admin triage endpoints.
//!
//! Every route requires a session identity whose `profiles` role is
//! `admin` before any submission data is read. No partial data leaks on
//! an authorization failure.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::ErrorBody;
use crate::models::{ContactSubmission, SubmissionStatus};
use crate::session::{identity_from_request, Identity};
use crate::store::{StoreError, SubmissionStore};

const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Serialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<ContactSubmission>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateStatusResponse {
    pub success: bool,
}

/// Resolve the caller and require the admin role, or produce the error
/// response that denies access.
async fn require_admin(
    req: &HttpRequest,
    store: &dyn SubmissionStore,
) -> Result<Identity, HttpResponse> {
    let identity = match identity_from_request(req) {
        Some(identity) => identity,
        None => {
            info!("Unauthenticated admin request");
            return Err(HttpResponse::Unauthorized().json(ErrorBody::new(
                "Authentication required. Please sign in and retry.",
            )));
        }
    };

    match store.role_for(&identity.email).await {
        Ok(Some(role)) if role == ADMIN_ROLE => Ok(identity),
        Ok(_) => {
            info!("User '{}' lacks the admin role", identity.email);
            Err(HttpResponse::Forbidden().json(ErrorBody::new("Admin role required")))
        }
        Err(e) => {
            error!("Database error checking role: {}", e);
            Err(HttpResponse::InternalServerError()
                .json(ErrorBody::new("Failed to verify authorization")))
        }
    }
}

/// GET /api/v1/admin/submissions
pub async fn list_submissions(
    req: HttpRequest,
    store: web::Data<dyn SubmissionStore>,
) -> HttpResponse {
    let identity = match require_admin(&req, store.get_ref()).await {
        Ok(identity) => identity,
        Err(denied) => return denied,
    };

    match store.list_all().await {
        Ok(submissions) => {
            info!(
                "Operator '{}' listed {} submissions",
                identity.email,
                submissions.len()
            );
            let total = submissions.len();
            HttpResponse::Ok().json(SubmissionListResponse { submissions, total })
        }
        Err(e) => {
            error!("Database error listing submissions: {}", e);
            HttpResponse::InternalServerError().json(ErrorBody::new("Failed to load submissions"))
        }
    }
}

/// PATCH /api/v1/admin/submissions/{id}
pub async fn update_submission_status(
    req: HttpRequest,
    store: web::Data<dyn SubmissionStore>,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> HttpResponse {
    let identity = match require_admin(&req, store.get_ref()).await {
        Ok(identity) => identity,
        Err(denied) => return denied,
    };

    let id = path.into_inner();

    let status: SubmissionStatus = match body.status.parse() {
        Ok(status) => status,
        Err(e) => return HttpResponse::BadRequest().json(ErrorBody::new(e.to_string())),
    };

    match store.update_status(&id, status).await {
        Ok(()) => {
            info!(
                "Operator '{}' set submission '{}' to '{}'",
                identity.email, id, status
            );
            HttpResponse::Ok().json(UpdateStatusResponse { success: true })
        }
        Err(StoreError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("Submission not found"))
        }
        Err(e) => {
            error!("Database error updating submission status: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Failed to update submission"))
        }
    }
}
