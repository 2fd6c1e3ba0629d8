//! PostgreSQL-backed storage. Tables live in a configurable schema (see `migration`).

use super::Storage;
use crate::error::AppError;
use crate::migration::qualified_table;
use crate::models::{
    FaqRecord, GalleryItemRecord, InquiryRecord, NewFaq, NewGalleryItem, NewInquiry,
};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
    schema: String,
}

impl PgStorage {
    /// `schema` must already hold the tables created by `apply_migrations`.
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn table(&self, name: &str) -> String {
        qualified_table(&self.schema, name)
    }
}

#[async_trait]
impl Storage for PgStorage {
    async fn create_inquiry(&self, new: NewInquiry) -> Result<InquiryRecord, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, email, message) VALUES ($1, $2, $3) \
             RETURNING id, name, email, message, created_at",
            self.table("inquiries")
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, InquiryRecord>(&sql)
            .bind(new.name)
            .bind(new.email)
            .bind(new.message)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn get_faqs(&self) -> Result<Vec<FaqRecord>, AppError> {
        let sql = format!(
            r#"SELECT id, question, answer, "order" FROM {} ORDER BY "order", id"#,
            self.table("faqs")
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, FaqRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_faq(&self, new: NewFaq) -> Result<FaqRecord, AppError> {
        let table = self.table("faqs");
        let row = match new.order {
            Some(order) => {
                let sql = format!(
                    r#"INSERT INTO {} (question, answer, "order") VALUES ($1, $2, $3)
                       RETURNING id, question, answer, "order""#,
                    table
                );
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, FaqRecord>(&sql)
                    .bind(new.question)
                    .bind(new.answer)
                    .bind(order)
                    .fetch_one(&self.pool)
                    .await?
            }
            None => {
                let sql = format!(
                    r#"INSERT INTO {} (question, answer) VALUES ($1, $2)
                       RETURNING id, question, answer, "order""#,
                    table
                );
                tracing::debug!(sql = %sql, "query");
                sqlx::query_as::<_, FaqRecord>(&sql)
                    .bind(new.question)
                    .bind(new.answer)
                    .fetch_one(&self.pool)
                    .await?
            }
        };
        Ok(row)
    }

    async fn get_gallery_items(&self) -> Result<Vec<GalleryItemRecord>, AppError> {
        let sql = format!(
            "SELECT id, title, image_url, category, created_at FROM {} ORDER BY id",
            self.table("gallery_items")
        );
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, GalleryItemRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create_gallery_item(&self, new: NewGalleryItem) -> Result<GalleryItemRecord, AppError> {
        let sql = format!(
            "INSERT INTO {} (title, image_url, category) VALUES ($1, $2, $3) \
             RETURNING id, title, image_url, category, created_at",
            self.table("gallery_items")
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, GalleryItemRecord>(&sql)
            .bind(new.title)
            .bind(new.image_url)
            .bind(new.category)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_connect_options(database_url)? else {
        return Ok(());
    };
    let mut conn = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", crate::migration::quote(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database on the same server, keeping
/// credentials and TLS settings, plus the target database name. `None` when the URL
/// names no database or names `postgres` itself.
fn admin_connect_options(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}
