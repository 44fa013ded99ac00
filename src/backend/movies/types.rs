use serde::{Deserialize, Serialize};

use crate::shared::messages;
use crate::shared::validation::require_url;
use crate::shared::{SharedError, Validate};

/// Body of `POST /movies`
///
/// The owner is never taken from the body; it is the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovieRequest {
    pub country: String,
    pub director: String,
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
    pub movie_id: f64,
}

impl Validate for CreateMovieRequest {
    fn validate(&self) -> Result<(), SharedError> {
        let text_fields = [
            ("country", &self.country),
            ("director", &self.director),
            ("year", &self.year),
            ("description", &self.description),
            ("nameRU", &self.name_ru),
            ("nameEN", &self.name_en),
        ];
        for (field, value) in text_fields {
            if value.trim().is_empty() {
                return Err(SharedError::validation(field, messages::MOVIE_CREATE_INVALID));
            }
        }

        require_url("image", &self.image)?;
        require_url("trailerLink", &self.trailer_link)?;
        require_url("thumbnail", &self.thumbnail)
    }
}

#[cfg(test)]
pub(crate) fn sample_request() -> CreateMovieRequest {
    CreateMovieRequest {
        country: "France".to_string(),
        director: "Director".to_string(),
        duration: 90.0,
        year: "2010".to_string(),
        description: "About".to_string(),
        image: "https://img.example.com/a.jpg".to_string(),
        trailer_link: "https://video.example.com/a".to_string(),
        thumbnail: "https://img.example.com/a-thumb.jpg".to_string(),
        name_ru: "Фильм".to_string(),
        name_en: "Film".to_string(),
        movie_id: 1.0,
    }
}
