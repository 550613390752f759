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

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};

use bridge_api::api::configure_api_routes;
use bridge_api::api::content::ContentDb;
use bridge_api::config::AppConfig;
use bridge_api::db;
use bridge_api::mailer::{Notifier, ResendMailer};
use bridge_api::store::{MemorySubmissionStore, PgSubmissionStore, SubmissionStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = AppConfig::from_env();
    info!("Starting DigitalBridge API on port {}", cfg.port);

    let pool = db::try_create_pool().await;
    let store: Arc<dyn SubmissionStore> = match pool.clone() {
        Some(pool) => Arc::new(PgSubmissionStore::new(pool)),
        None => {
            warn!("Using in-memory submission store; submissions will not survive a restart");
            Arc::new(MemorySubmissionStore::new())
        }
    };

    if cfg.resend_api_key.is_none() {
        warn!("RESEND_API_KEY not set, notification emails will be skipped");
    }
    let notifier: Arc<dyn Notifier> = Arc::new(ResendMailer::from_config(&cfg));
    let content_db = ContentDb { pool };
    let port = cfg.port;

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(store.clone()))
            .app_data(web::Data::from(notifier.clone()))
            .app_data(web::Data::new(content_db.clone()))
            .wrap(Cors::permissive())
            .configure(configure_api_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    Ok(())
}
