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

//! Async Postgres pool construction (sqlx).

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::env;
use std::time::Duration;
use tracing::{info, warn};

const MAX_CONNECTIONS: u32 = 10;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect a pool to the given database URL.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await?;
    info!("Database connection pool established");
    Ok(pool)
}

/// Build a pool from `DATABASE_URL`, or `None` when it is unset or
/// unreachable.
///
/// Without a pool the server still boots: submissions go to the in-memory
/// store and the content endpoint reports a query failure.
pub async fn try_create_pool() -> Option<PgPool> {
    let url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            warn!("DATABASE_URL not set, running without database");
            return None;
        }
    };
    match create_pool(&url).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            None
        }
    }
}
