//! CRUD execution against PostgreSQL. Every statement binds its arguments;
//! SQL text is never built from request data.

use crate::error::AppError;
use crate::model::{MediaInput, MediaItem};
use sqlx::PgPool;

/// Column list for `media` queries.
const MEDIA_COLUMNS: &str = "id_media, title, release_year, genre";

pub struct MediaService;

impl MediaService {
    /// List all rows in storage order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MediaItem>, AppError> {
        let query = format!("SELECT {MEDIA_COLUMNS} FROM media");
        let rows = sqlx::query_as::<_, MediaItem>(&query).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Fetch one row by id. Absent is a normal outcome, not an error.
    pub async fn find_by_id(pool: &PgPool, id: i32) -> Result<Option<MediaItem>, AppError> {
        let query = format!("SELECT {MEDIA_COLUMNS} FROM media WHERE id_media = $1");
        let row = sqlx::query_as::<_, MediaItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Insert one row; returns the created row including the generated id.
    pub async fn create(pool: &PgPool, input: &MediaInput) -> Result<MediaItem, AppError> {
        let query = format!(
            "INSERT INTO media (title, release_year, genre) VALUES ($1, $2, $3) \
             RETURNING {MEDIA_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MediaItem>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.genre)
            .fetch_one(pool)
            .await?;
        Ok(row)
    }

    /// Full-field update by id. Returns the row as now stored, or None if
    /// the id matched nothing.
    pub async fn update(
        pool: &PgPool,
        id: i32,
        input: &MediaInput,
    ) -> Result<Option<MediaItem>, AppError> {
        let query = format!(
            "UPDATE media SET title = $1, release_year = $2, genre = $3 \
             WHERE id_media = $4 RETURNING {MEDIA_COLUMNS}"
        );
        let row = sqlx::query_as::<_, MediaItem>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.genre)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Hard delete by id. Returns true if a row was removed.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM media WHERE id_media = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
