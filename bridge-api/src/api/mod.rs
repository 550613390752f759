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

pub mod admin;
pub mod contact;
pub mod content;

use actix_web::{web, HttpResponse};
use serde::Serialize;

/// JSON error envelope shared by every endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    // Malformed request bodies and query strings surface as the same JSON
    // error envelope.
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
        actix_web::error::InternalError::from_response(err, response).into()
    });
    let query_config = web::QueryConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorBody::new(err.to_string()));
        actix_web::error::InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config).app_data(query_config).service(
        web::scope("/api/v1")
            // Contact intake
            .service(web::resource("/contact").route(web::post().to(contact::submit_contact)))
            // Read-only content for the marketing pages
            .service(web::resource("/content").route(web::get().to(content::get_content)))
            // Admin triage
            .service(
                web::resource("/admin/submissions")
                    .route(web::get().to(admin::list_submissions)),
            )
            .service(
                web::resource("/admin/submissions/{id}")
                    .route(web::patch().to(admin::update_submission_status)),
            ),
    );
}
