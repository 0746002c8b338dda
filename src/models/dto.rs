use serde::{Deserialize, Serialize};

use super::{Genre, Language, Movie};

/// 电影详情响应DTO（不包含评分人数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailsResponse {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub poster_url: Option<String>,
    pub overview: Option<String>,
    pub genre: Genre,
    pub average_rating: Option<f64>,
    pub runtime: Option<i32>,
    pub language: Language,
}

impl TryFrom<Movie> for MovieDetailsResponse {
    type Error = String;

    fn try_from(movie: Movie) -> Result<Self, Self::Error> {
        Ok(Self {
            genre: movie.get_genre()?,
            language: movie.get_language()?,
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            poster_url: movie.poster_url,
            overview: movie.overview,
            average_rating: movie.rating_score,
            runtime: movie.runtime_minutes,
        })
    }
}

/// 电影列表项响应DTO，热门列表与搜索共用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieListResponse {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub poster_url: Option<String>,
    pub average_rating: Option<f64>,
}

impl From<Movie> for MovieListResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: movie.release_date,
            poster_url: movie.poster_url,
            average_rating: movie.rating_score,
        }
    }
}
