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

//! Read-only content queries for the marketing pages.
//!
//! Parameter validation happens before any database access, so the 400
//! paths work even when the server runs without a pool.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::error;

use crate::api::ErrorBody;
use crate::models::content::{BlogPost, Service, Testimonial};

const FETCH_ERROR: &str = "Failed to fetch content";
const INVALID_TYPE_ERROR: &str = "Invalid content type. Supported types: services, \
     testimonials, blog_posts, service_by_category, blog_by_slug";

/// Database handle for the content endpoint. `None` when the server runs
/// without a database; every query then reports a fetch failure.
#[derive(Clone)]
pub struct ContentDb {
    pub pool: Option<PgPool>,
}

#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    #[serde(rename = "type")]
    pub content_type: Option<String>,
    pub featured: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    pub category: Option<String>,
    pub slug: Option<String>,
}

fn default_limit() -> i64 {
    10
}

#[derive(Debug, Serialize)]
pub struct ContentResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
}

fn ok<T: Serialize>(data: Vec<T>) -> HttpResponse {
    let count = data.len();
    HttpResponse::Ok().json(ContentResponse { data, count })
}

fn fetch_failed(e: sqlx::Error) -> HttpResponse {
    error!("Database error fetching content: {}", e);
    HttpResponse::InternalServerError().json(ErrorBody::new(FETCH_ERROR))
}

/// GET /api/v1/content
pub async fn get_content(
    db: web::Data<ContentDb>,
    query: web::Query<ContentQuery>,
) -> HttpResponse {
    let content_type = query.content_type.as_deref().unwrap_or_default();
    let featured = query.featured.as_deref() == Some("true");
    let limit = query.limit;

    // Required parameters are checked before touching the database.
    match content_type {
        "services" | "testimonials" | "blog_posts" => {}
        "service_by_category" => {
            if query.category.is_none() {
                return HttpResponse::BadRequest()
                    .json(ErrorBody::new("Category parameter is required"));
            }
        }
        "blog_by_slug" => {
            if query.slug.is_none() {
                return HttpResponse::BadRequest()
                    .json(ErrorBody::new("Slug parameter is required"));
            }
        }
        _ => {
            return HttpResponse::BadRequest().json(ErrorBody::new(INVALID_TYPE_ERROR));
        }
    }

    let pool = match &db.pool {
        Some(pool) => pool,
        None => {
            error!("Content query without a database pool");
            return HttpResponse::InternalServerError().json(ErrorBody::new(FETCH_ERROR));
        }
    };

    match content_type {
        "services" => match Service::list_active(pool, featured, limit).await {
            Ok(services) => ok(services),
            Err(e) => fetch_failed(e),
        },
        "testimonials" => match Testimonial::list_active(pool, featured, limit).await {
            Ok(testimonials) => ok(testimonials),
            Err(e) => fetch_failed(e),
        },
        "blog_posts" => match BlogPost::list_published(pool, featured, limit).await {
            Ok(posts) => ok(posts),
            Err(e) => fetch_failed(e),
        },
        "service_by_category" => {
            let category = query.category.as_deref().unwrap_or_default();
            match Service::list_by_category(pool, category).await {
                Ok(services) => ok(services),
                Err(e) => fetch_failed(e),
            }
        }
        "blog_by_slug" => {
            let slug = query.slug.as_deref().unwrap_or_default();
            match BlogPost::get_by_slug(pool, slug).await {
                Ok(post) => ok(post.into_iter().collect()),
                Err(e) => fetch_failed(e),
            }
        }
        _ => unreachable!("content type already validated"),
    }
}
