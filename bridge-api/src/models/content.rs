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

//! Read-only content rows backing the marketing pages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub category: String,
    pub price_from: Option<f64>,
    pub features: Option<Vec<String>>,
    pub icon_name: Option<String>,
    pub image_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Testimonial {
    pub id: String,
    pub client_name: String,
    pub client_company: Option<String>,
    pub client_position: Option<String>,
    pub content: String,
    pub rating: Option<i32>,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub featured_image_url: Option<String>,
    pub author_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub is_published: bool,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Service {
    /// Active services, optionally featured only.
    pub async fn list_active(
        pool: &PgPool,
        featured: bool,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT * FROM services
            WHERE is_active = TRUE AND (is_featured = TRUE OR $1 = FALSE)
            LIMIT $2
            "#,
        )
        .bind(featured)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Active services in a category.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE category = $1 AND is_active = TRUE",
        )
        .bind(category)
        .fetch_all(pool)
        .await
    }
}

impl Testimonial {
    pub async fn list_active(
        pool: &PgPool,
        featured: bool,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, Testimonial>(
            r#"
            SELECT * FROM testimonials
            WHERE is_active = TRUE AND (is_featured = TRUE OR $1 = FALSE)
            LIMIT $2
            "#,
        )
        .bind(featured)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}

impl BlogPost {
    /// Published posts, newest first.
    pub async fn list_published(
        pool: &PgPool,
        featured: bool,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, BlogPost>(
            r#"
            SELECT * FROM blog_posts
            WHERE is_published = TRUE AND (is_featured = TRUE OR $1 = FALSE)
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(featured)
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Published post by slug.
    pub async fn get_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Self>, sqlx::Error> {
        sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts WHERE slug = $1 AND is_published = TRUE",
        )
        .bind(slug)
        .fetch_optional(pool)
        .await
    }
}
