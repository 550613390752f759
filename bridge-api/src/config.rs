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

use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 10;

/// Server configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Resend API key. When unset, notification emails are skipped entirely.
    pub resend_api_key: Option<String>,
    /// From address for both outgoing emails.
    pub mail_from: String,
    /// Operator address that receives the internal alert email.
    pub admin_email: String,
    /// Upper bound on a single mail transport call. No retries.
    pub mail_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("BRIDGE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let mail_timeout = env::var("MAIL_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(DEFAULT_MAIL_TIMEOUT_SECS);

        Self {
            port,
            resend_api_key: env::var("RESEND_API_KEY").ok().filter(|k| !k.is_empty()),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "DigitalBridge <noreply@digitalbridge.com>".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@digitalbridge.com".to_string()),
            mail_timeout: Duration::from_secs(mail_timeout),
        }
    }
}
