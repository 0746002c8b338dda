// 演示数据
//
// 打包在二进制里的电影目录，只在 movies 表为空时写入。

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::{Pool, Sqlite};

use crate::models::{Genre, Language};
use crate::services::fold_title;

const DEMO_MOVIES_JSON: &str = include_str!("../../data/movies.json");

#[derive(Debug, Deserialize)]
struct SeedMovie {
    id: i64,
    title: String,
    release_date: String,
    poster_url: Option<String>,
    overview: Option<String>,
    genre: Genre,
    runtime_minutes: Option<i32>,
    language: Language,
    rating_score: Option<f64>,
    rating_count: i64,
}

fn load_demo_movies() -> Result<Vec<SeedMovie>> {
    serde_json::from_str(DEMO_MOVIES_JSON).context("Failed to parse bundled demo movies")
}

/// 写入演示数据，返回插入的条数；表中已有数据时什么也不做
pub async fn seed_demo_movies(pool: &Pool<Sqlite>) -> Result<u64> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await?;

    if existing > 0 {
        tracing::info!("Movies table already has {} rows, skipping demo seed", existing);
        return Ok(0);
    }

    let movies = load_demo_movies()?;
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for movie in &movies {
        let result = sqlx::query(
            r#"
            INSERT INTO movies (
                id, title, title_search, release_date, poster_url, overview, genre,
                runtime_minutes, language, rating_score, rating_count
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(fold_title(&movie.title))
        .bind(&movie.release_date)
        .bind(&movie.poster_url)
        .bind(&movie.overview)
        .bind(movie.genre.as_str())
        .bind(movie.runtime_minutes)
        .bind(movie.language.as_str())
        .bind(movie.rating_score)
        .bind(movie.rating_count)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;
    tracing::info!("Seeded {} demo movies", inserted);
    Ok(inserted)
}

/// 为 title_search 为空的行补齐折叠后的标题，返回更新的条数
pub async fn index_search_titles(pool: &Pool<Sqlite>) -> Result<u64> {
    let pending: Vec<(i64, String)> =
        sqlx::query_as("SELECT id, title FROM movies WHERE title_search IS NULL")
            .fetch_all(pool)
            .await?;

    if pending.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for (id, title) in &pending {
        sqlx::query("UPDATE movies SET title_search = ? WHERE id = ?")
            .bind(fold_title(title))
            .bind(id)
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;

    tracing::info!("Indexed search titles for {} movies", pending.len());
    Ok(pending.len() as u64)
}
