use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;

pub mod query_builder;
pub mod repository;
pub mod schema;
pub mod seed;

pub use query_builder::MovieQueryBuilder;
pub use repository::{MovieRepository, SqliteMovieRepository};

#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
    repository: SqliteMovieRepository,
}

impl Database {
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Connecting to database: {}", database_url);

        let connect_options = SqliteConnectOptions::from_str(database_url)?;

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(connect_options)
            .await?;

        // Run migrations
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;

        schema::verify_schema(&pool).await?;
        seed::index_search_titles(&pool).await?;

        let stats = schema::get_database_stats(&pool).await?;
        tracing::info!(
            "Database initialized - Movies: {}, Size: {:.2} MB",
            stats.movie_count,
            stats.database_size_mb()
        );

        let repository = SqliteMovieRepository::new(pool.clone());

        Ok(Self { pool, repository })
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub fn repository(&self) -> &SqliteMovieRepository {
        &self.repository
    }

    /// 获取数据库统计信息
    pub async fn get_stats(&self) -> Result<schema::DatabaseStats> {
        schema::get_database_stats(&self.pool).await
    }

    /// 验证数据库完整性
    pub async fn verify_integrity(&self) -> Result<()> {
        schema::verify_schema(&self.pool).await
    }

    /// 空表时写入演示数据
    pub async fn seed_demo_data(&self) -> Result<u64> {
        seed::seed_demo_movies(&self.pool).await
    }

    /// 补齐外部写入行的标题搜索列
    pub async fn index_search_titles(&self) -> Result<u64> {
        seed::index_search_titles(&self.pool).await
    }
}
