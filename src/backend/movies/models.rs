/**
 * Movie Model
 *
 * Database row and client representation of a saved movie. Columns are
 * snake_case; the JSON keys are what the SPA expects (`_id`, `trailerLink`,
 * `nameRU`, ...).
 *
 * `duration` and `movieId` accept any JSON number. Whole values are written
 * back as integers, so `90` round-trips as `90` rather than `90.0`.
 */

use serde::{Deserialize, Serialize, Serializer};

use crate::shared::ObjectId;

/// Saved movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub country: String,
    pub director: String,
    /// Running time in minutes
    #[serde(serialize_with = "serialize_number")]
    pub duration: f64,
    pub year: String,
    pub description: String,
    pub image: String,
    pub trailer_link: String,
    pub thumbnail: String,
    #[serde(rename = "nameRU")]
    pub name_ru: String,
    #[serde(rename = "nameEN")]
    pub name_en: String,
    /// Identifier in the external movie catalog
    #[serde(serialize_with = "serialize_number")]
    pub movie_id: f64,
    /// User who saved the movie; fixed at creation
    pub owner: ObjectId,
}

/// Largest magnitude below which every whole `f64` is an exact `i64`
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
