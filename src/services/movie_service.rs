use std::sync::Arc;

use super::error::{CatalogError, CatalogResult};
use super::query_plan::{build_query_plan, PageWindow};
use super::sort_order::SortOrder;
use crate::database::MovieRepository;
use crate::models::{
    MovieDetailsResponse, MovieListResponse, NumberValidator, SearchCriteria, Validator,
};

/// 热门列表每页条数
pub const POPULAR_PAGE_SIZE: i64 = 50;

/// 电影查询服务，无状态，只读
#[derive(Clone)]
pub struct MovieQueryService {
    repository: Arc<dyn MovieRepository>,
}

impl MovieQueryService {
    pub fn new<R: MovieRepository + 'static>(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// 获取电影详情
    pub async fn get_movie_by_id(&self, id: i64) -> CatalogResult<MovieDetailsResponse> {
        NumberValidator::validate_movie_id(id)?;

        let movie = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        MovieDetailsResponse::try_from(movie)
            .map_err(|e| CatalogError::Store(anyhow::anyhow!("Corrupt movie record {}: {}", id, e)))
    }

    /// 按评分从高到低分页，page 从1开始，缺省为第一页；超出范围返回空列表
    pub async fn get_popular_movies(&self, page: Option<i64>) -> CatalogResult<Vec<MovieListResponse>> {
        NumberValidator::validate_page(&page)?;

        let window = PageWindow::page(page.unwrap_or(1), POPULAR_PAGE_SIZE);
        let movies = self
            .repository
            .find_page(&SortOrder::by_popularity(), &window)
            .await?;

        Ok(movies.into_iter().map(MovieListResponse::from).collect())
    }

    /// 搜索电影：标题必须包含查询词，其余条件可选
    pub async fn search_movies(&self, criteria: &SearchCriteria) -> CatalogResult<Vec<MovieListResponse>> {
        criteria.validate()?;

        let plan = build_query_plan(criteria)?;
        tracing::debug!(
            "Search plan - predicates: {:?}, sort: {:?}, window: {:?}",
            plan.predicates,
            plan.sort,
            plan.window
        );

        let movies = self.repository.find_matching(&plan).await?;
        Ok(movies.into_iter().map(MovieListResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movie, SortDirection, ValidationError};
    use crate::services::query_plan::{Predicate, QueryPlan};
    use crate::services::sort_order::SortColumn;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 内存仓库：记录每次调用的参数，并用查询计划在内存中过滤
    #[derive(Default)]
    struct RecordingRepository {
        movies: Vec<Movie>,
        pages: Mutex<Vec<(SortOrder, PageWindow)>>,
        plans: Mutex<Vec<QueryPlan>>,
        fail: bool,
    }

    impl RecordingRepository {
        fn with_movies(movies: Vec<Movie>) -> Self {
            Self {
                movies,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl MovieRepository for Arc<RecordingRepository> {
        async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Movie>> {
            if self.fail {
                anyhow::bail!("connection refused");
            }
            Ok(self.movies.iter().find(|m| m.id == id).cloned())
        }

        async fn find_page(&self, sort: &SortOrder, window: &PageWindow) -> anyhow::Result<Vec<Movie>> {
            self.pages.lock().unwrap().push((*sort, *window));
            Ok(self
                .movies
                .iter()
                .skip(window.offset as usize)
                .take(window.limit as usize)
                .cloned()
                .collect())
        }

        async fn find_matching(&self, plan: &QueryPlan) -> anyhow::Result<Vec<Movie>> {
            self.plans.lock().unwrap().push(plan.clone());
            Ok(self
                .movies
                .iter()
                .filter(|m| plan.matches(m))
                .take(plan.window.limit as usize)
                .cloned()
                .collect())
        }

        async fn count(&self) -> anyhow::Result<i64> {
            Ok(self.movies.len() as i64)
        }
    }

    fn movie(id: i64, title: &str, release_date: &str, rating: f64) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            release_date: release_date.to_string(),
            poster_url: Some(format!("http://movie.test/movie/{}/poster.png", id)),
            overview: Some(format!("This is a good movie #{}", id)),
            genre: "Action".to_string(),
            runtime_minutes: Some(120),
            language: "English".to_string(),
            rating_score: Some(rating),
            rating_count: 10000 + id,
        }
    }

    fn catalog(size: i64) -> Vec<Movie> {
        (1..=size)
            .map(|i| movie(i, &format!("movie title #{}", i), "2025-01-01", 8.1))
            .collect()
    }

    fn service(repository: &Arc<RecordingRepository>) -> MovieQueryService {
        MovieQueryService::new(repository.clone())
    }

    #[tokio::test]
    async fn test_get_movie_by_id_maps_detail_fields() {
        let repo = Arc::new(RecordingRepository::with_movies(vec![movie(
            1,
            "Mad Max: Fury Road",
            "2015-05-15",
            8.1,
        )]));

        let details = service(&repo).get_movie_by_id(1).await.unwrap();
        assert_eq!(details.id, 1);
        assert_eq!(details.title, "Mad Max: Fury Road");
        assert_eq!(details.average_rating, Some(8.1));
        assert_eq!(details.runtime, Some(120));
        assert_eq!(details.release_date, "2015-05-15");
    }

    #[tokio::test]
    async fn test_get_movie_by_id_not_found() {
        let repo = Arc::new(RecordingRepository::default());
        let err = service(&repo).get_movie_by_id(1000).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(1000)));
    }

    #[tokio::test]
    async fn test_get_movie_by_id_rejects_non_positive_id() {
        let repo = Arc::new(RecordingRepository::default());
        let err = service(&repo).get_movie_by_id(-1).await.unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::InvalidMovieId(-1))
        ));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let repo = Arc::new(RecordingRepository {
            fail: true,
            ..Default::default()
        });
        let err = service(&repo).get_movie_by_id(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::Store(_)));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn test_popular_without_page_requests_first_window() {
        let repo = Arc::new(RecordingRepository::with_movies(catalog(50)));
        let movies = service(&repo).get_popular_movies(None).await.unwrap();
        assert_eq!(movies.len(), 50);
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[0].poster_url.as_deref(), Some("http://movie.test/movie/1/poster.png"));

        let pages = repo.pages.lock().unwrap();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].0, SortOrder::new(SortColumn::RatingScore, SortDirection::Descending));
        assert_eq!(pages[0].1, PageWindow { offset: 0, limit: 50 });
    }

    #[tokio::test]
    async fn test_popular_page_one_equals_no_page() {
        let repo = Arc::new(RecordingRepository::with_movies(catalog(92)));
        let svc = service(&repo);
        let default_page = svc.get_popular_movies(None).await.unwrap();
        let first_page = svc.get_popular_movies(Some(1)).await.unwrap();
        assert_eq!(default_page, first_page);
    }

    #[tokio::test]
    async fn test_popular_second_page_window() {
        let repo = Arc::new(RecordingRepository::with_movies(catalog(92)));
        let movies = service(&repo).get_popular_movies(Some(2)).await.unwrap();
        assert_eq!(movies.len(), 42);
        assert_eq!(repo.pages.lock().unwrap()[0].1, PageWindow { offset: 50, limit: 50 });
    }

    #[tokio::test]
    async fn test_popular_page_beyond_data_is_empty() {
        let repo = Arc::new(RecordingRepository::with_movies(catalog(92)));
        let movies = service(&repo).get_popular_movies(Some(3)).await.unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_popular_rejects_page_zero() {
        let repo = Arc::new(RecordingRepository::default());
        let err = service(&repo).get_popular_movies(Some(0)).await.unwrap_err();
        assert!(matches!(err, CatalogError::Validation(ValidationError::InvalidPage(0))));
        assert!(repo.pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_only_query_uses_default_sort_and_fixed_window() {
        let repo = Arc::new(RecordingRepository::default());
        service(&repo)
            .search_movies(&SearchCriteria {
                sort_by: Some("title".to_string()),
                sort_direction: Some(SortDirection::Ascending),
                ..SearchCriteria::new("test")
            })
            .await
            .unwrap();

        let plans = repo.plans.lock().unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].predicates, vec![Predicate::TitleContains("test".to_string())]);
        assert_eq!(plans[0].sort.column, SortColumn::Id);
        assert_eq!(plans[0].window, PageWindow { offset: 0, limit: 10 });
    }

    #[tokio::test]
    async fn test_search_filters_and_maps_results() {
        let repo = Arc::new(RecordingRepository::with_movies(vec![
            movie(1, "The Old One", "2001-03-01", 7.0),
            movie(2, "Mad Max: Fury Road", "2015-05-15", 8.1),
            movie(3, "The Dark Knight", "2008-07-18", 9.0),
            movie(4, "Breathe", "2017-10-13", 7.2),
        ]));

        let results = service(&repo)
            .search_movies(&SearchCriteria {
                release_date_from: Some("2008".to_string()),
                ..SearchCriteria::new("the")
            })
            .await
            .unwrap();

        let ids: Vec<i64> = results.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_search_invalid_date_never_reaches_store() {
        let repo = Arc::new(RecordingRepository::default());
        let err = service(&repo)
            .search_movies(&SearchCriteria {
                release_date_to: Some("20-01".to_string()),
                ..SearchCriteria::new("the")
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::InvalidDateFormat(_)));
        assert!(repo.plans.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_rejects_blank_query() {
        let repo = Arc::new(RecordingRepository::default());
        let err = service(&repo)
            .search_movies(&SearchCriteria::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(ValidationError::EmptyQuery)));
    }
}
