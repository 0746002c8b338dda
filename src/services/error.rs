use thiserror::Error;

use super::date_range::InvalidDateFormat;
use crate::models::ValidationError;

/// 电影查询服务的统一错误类型
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    InvalidDateFormat(#[from] InvalidDateFormat),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Movie not found: {0}")]
    NotFound(i64),

    /// 存储层错误原样透传，不重试
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
