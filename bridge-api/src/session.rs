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

//! Per-request session identity.
//!
//! Identity is resolved from the request's `email` cookie into an explicit
//! value handlers pass around; there is no ambient current-user state.

use actix_web::HttpRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// Resolve the caller's identity from the session cookie, if present.
pub fn identity_from_request(req: &HttpRequest) -> Option<Identity> {
    req.cookie("email")
        .map(|c| c.value().to_string())
        .filter(|e| !e.is_empty())
        .map(|email| Identity { email })
}
