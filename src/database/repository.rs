use anyhow::Result;
use async_trait::async_trait;
use sqlx::{Pool, Sqlite};

use super::query_builder::MovieQueryBuilder;
use crate::models::Movie;
use crate::services::query_plan::{PageWindow, QueryPlan};
use crate::services::sort_order::SortOrder;

/// 电影数据仓库接口（只读）
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>>;
    /// 全量集合上的排序分页
    async fn find_page(&self, sort: &SortOrder, window: &PageWindow) -> Result<Vec<Movie>>;
    /// 按查询计划过滤后的排序分页
    async fn find_matching(&self, plan: &QueryPlan) -> Result<Vec<Movie>>;
    async fn count(&self) -> Result<i64>;
}

/// SQLite 数据库仓库实现
#[derive(Clone)]
pub struct SqliteMovieRepository {
    pool: Pool<Sqlite>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>("SELECT * FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(movie)
    }

    async fn find_page(&self, sort: &SortOrder, window: &PageWindow) -> Result<Vec<Movie>> {
        let mut query = MovieQueryBuilder::new()
            .with_sorting(sort)
            .with_pagination(window)
            .build();

        let movies = query
            .build_query_as::<Movie>()
            .fetch_all(&self.pool)
            .await?;

        Ok(movies)
    }

    async fn find_matching(&self, plan: &QueryPlan) -> Result<Vec<Movie>> {
        let mut query = MovieQueryBuilder::new().with_plan(plan).build();
        tracing::debug!("Executing movie search: {}", query.sql());

        let movies = query
            .build_query_as::<Movie>()
            .fetch_all(&self.pool)
            .await?;

        Ok(movies)
    }

    async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
