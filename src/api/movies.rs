use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
};
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use super::response::success;
use super::AppState;
use crate::models::{SearchCriteria, SortDirection};

#[derive(Debug, Deserialize)]
pub struct PopularParams {
    pub page: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_dir: Option<String>,
    pub filter_date_from: Option<String>,
    pub filter_date_to: Option<String>,
    pub filter_min_rate: Option<f64>,
}

impl SearchParams {
    fn into_criteria(self) -> ApiResult<SearchCriteria> {
        let sort_direction = self
            .sort_dir
            .as_deref()
            .map(str::parse::<SortDirection>)
            .transpose()
            .map_err(|e| ApiError::BadRequest(e.to_string()))?;

        Ok(SearchCriteria {
            query: self.query.unwrap_or_default(),
            sort_by: self.sort_by,
            sort_direction,
            release_date_from: self.filter_date_from,
            release_date_to: self.filter_date_to,
            min_rating: self.filter_min_rate,
        })
    }
}

/// 获取电影详情
pub async fn get_movie_by_id(
    path: Result<Path<i64>, PathRejection>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = path?;
    let movie = state.movie_service.get_movie_by_id(id).await?;
    Ok(success(movie))
}

/// 热门电影，页码从1开始
pub async fn get_popular_movies(
    query: Result<Query<PopularParams>, QueryRejection>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = query?;
    let movies = state.movie_service.get_popular_movies(params.page).await?;
    Ok(success(movies))
}

/// 按标题搜索，可选排序、日期范围和最低评分
pub async fn search_movies(
    query: Result<Query<SearchParams>, QueryRejection>,
    State(state): State<AppState>,
) -> ApiResult<impl IntoResponse> {
    let Query(params) = query?;
    let criteria = params.into_criteria()?;
    let movies = state.movie_service.search_movies(&criteria).await?;

    tracing::debug!("Search '{}' returned {} movies", criteria.query, movies.len());
    Ok(success(movies))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(sort_dir: Option<&str>) -> SearchParams {
        SearchParams {
            query: Some("the".to_string()),
            sort_by: Some("releaseDate".to_string()),
            sort_dir: sort_dir.map(String::from),
            filter_date_from: Some("2008".to_string()),
            filter_date_to: None,
            filter_min_rate: Some(7.5),
        }
    }

    #[test]
    fn test_params_into_criteria() {
        let criteria = params(Some("DESC")).into_criteria().unwrap();
        assert_eq!(criteria.query, "the");
        assert_eq!(criteria.sort_by.as_deref(), Some("releaseDate"));
        assert_eq!(criteria.sort_direction, Some(SortDirection::Descending));
        assert_eq!(criteria.release_date_from.as_deref(), Some("2008"));
        assert!(criteria.release_date_to.is_none());
        assert_eq!(criteria.min_rating, Some(7.5));
    }

    #[test]
    fn test_missing_direction_stays_absent() {
        let criteria = params(None).into_criteria().unwrap();
        assert!(criteria.sort_direction.is_none());
    }

    #[test]
    fn test_unknown_direction_is_bad_request() {
        let err = params(Some("sideways")).into_criteria().unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
