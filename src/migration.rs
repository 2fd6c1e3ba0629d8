//! DDL for the site tables. Idempotent: safe to run on every startup.

use crate::error::AppError;
use sqlx::PgPool;

/// Quote an identifier for PostgreSQL.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Schema-qualified table name, e.g. `"public"."faqs"`.
pub fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quote(schema), quote(table))
}

/// Create `schema` and the `inquiries`, `faqs` and `gallery_items` tables if missing.
pub async fn apply_migrations(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let statements = [
        format!("CREATE SCHEMA IF NOT EXISTS {}", quote(schema)),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                message TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            qualified_table(schema, "inquiries")
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                "order" SERIAL
            )
            "#,
            qualified_table(schema, "faqs")
        ),
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id SERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                image_url TEXT NOT NULL,
                category TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            qualified_table(schema, "gallery_items")
        ),
    ];
    for sql in &statements {
        tracing::debug!(sql = %sql, "migration");
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!(schema = %schema, "site tables ready");
    Ok(())
}
