//! Media item row and request DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media` table. The id column keeps its historical name
/// `id_media`, which is also the field name on the wire.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct MediaItem {
    pub id_media: i32,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
}

/// Validated create/update payload. Produced by
/// [`RequestValidator`](crate::service::RequestValidator) from a raw JSON
/// body; never deserialized directly from a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaInput {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
}
