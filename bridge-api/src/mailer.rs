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

//! Notification dispatch over the Resend HTTP API.
//!
//! Two templated emails per stored submission: an internal alert to the
//! operator address and a confirmation to the submitter. Delivery is
//! best-effort with a single bounded attempt; the caller logs the outcome
//! and must never let it influence the submission result.

use crate::config::AppConfig;
use crate::models::ContactSubmission;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Both emails were accepted by the transport.
    Sent,
    /// No transport configured; nothing was attempted.
    Skipped,
    Failed(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> NotifyOutcome;
}

#[derive(Debug, Serialize)]
struct EmailPayload {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

pub struct ResendMailer {
    client: reqwest::Client,
    api_key: Option<String>,
    from: String,
    admin_email: String,
}

impl ResendMailer {
    pub fn from_config(cfg: &AppConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(cfg.mail_timeout)
            .build()
            .expect("Failed to build mail transport client");
        Self {
            client,
            api_key: cfg.resend_api_key.clone(),
            from: cfg.mail_from.clone(),
            admin_email: cfg.admin_email.clone(),
        }
    }

    fn admin_alert(&self, s: &ContactSubmission) -> EmailPayload {
        let mut html = format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>",
            s.name, s.email
        );
        for (label, value) in [
            ("Phone", &s.phone),
            ("Company", &s.company),
            ("Subject", &s.subject),
            ("Service Interest", &s.service_interest),
        ] {
            if let Some(value) = value {
                html.push_str(&format!("<p><strong>{}:</strong> {}</p>", label, value));
            }
        }
        html.push_str(&format!(
            "<p><strong>Message:</strong></p><p>{}</p><hr>\
             <p><small>Submitted at: {}</small></p>",
            s.message,
            s.created_at.to_rfc3339()
        ));

        EmailPayload {
            from: self.from.clone(),
            to: vec![self.admin_email.clone()],
            subject: format!(
                "New Contact Submission: {}",
                s.subject.as_deref().unwrap_or("General Inquiry")
            ),
            html,
        }
    }

    fn confirmation(&self, s: &ContactSubmission) -> EmailPayload {
        EmailPayload {
            from: self.from.clone(),
            to: vec![s.email.clone()],
            subject: "Thank you for contacting DigitalBridge".to_string(),
            html: format!(
                "<h2>Thank you for reaching out!</h2>\
                 <p>Dear {},</p>\
                 <p>We have received your message and will get back to you within 24 hours.</p>\
                 <p><strong>Your message:</strong></p>\
                 <p>{}</p>\
                 <br>\
                 <p>Best regards,<br>The DigitalBridge Team</p>",
                s.name, s.message
            ),
        }
    }

    async fn send(&self, api_key: &str, email: &EmailPayload) -> Result<(), String> {
        let response = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(format!("mail transport returned {}", response.status()))
        }
    }
}

#[async_trait]
impl Notifier for ResendMailer {
    async fn notify(&self, submission: &ContactSubmission) -> NotifyOutcome {
        let api_key = match &self.api_key {
            Some(key) => key.clone(),
            None => return NotifyOutcome::Skipped,
        };

        if let Err(e) = self.send(&api_key, &self.admin_alert(submission)).await {
            return NotifyOutcome::Failed(e);
        }
        if let Err(e) = self.send(&api_key, &self.confirmation(submission)).await {
            return NotifyOutcome::Failed(e);
        }

        info!("Notification emails sent for submission '{}'", submission.id);
        NotifyOutcome::Sent
    }
}
