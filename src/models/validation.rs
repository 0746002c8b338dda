use thiserror::Error;

/// 验证错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Query is empty")]
    EmptyQuery,

    #[error("Invalid movie id: {0} (must be positive)")]
    InvalidMovieId(i64),

    #[error("Invalid page: {0} (pages start at 1)")]
    InvalidPage(i64),

    #[error("Invalid minimum rating: {0} (must be between 1 and 10)")]
    InvalidMinRating(f64),

    #[error("Invalid sort direction: {0} (expected asc or desc)")]
    InvalidSortDirection(String),
}

/// 验证器trait
pub trait Validator {
    type Error;

    fn validate(&self) -> Result<(), Self::Error>;
}

/// 字符串验证工具
pub struct StringValidator;

impl StringValidator {
    pub fn validate_query(query: &str) -> Result<(), ValidationError> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(())
    }
}

/// 数值验证工具
pub struct NumberValidator;

impl NumberValidator {
    pub const MIN_RATING_FLOOR: f64 = 1.0;
    pub const MAX_RATING_FLOOR: f64 = 10.0;

    pub fn validate_movie_id(id: i64) -> Result<(), ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidMovieId(id));
        }
        Ok(())
    }

    pub fn validate_page(page: &Option<i64>) -> Result<(), ValidationError> {
        if let Some(p) = page {
            if *p < 1 {
                return Err(ValidationError::InvalidPage(*p));
            }
        }
        Ok(())
    }

    pub fn validate_min_rating(rating: &Option<f64>) -> Result<(), ValidationError> {
        if let Some(r) = rating {
            // NaN 也会落到这里
            if !(Self::MIN_RATING_FLOOR..=Self::MAX_RATING_FLOOR).contains(r) {
                return Err(ValidationError::InvalidMinRating(*r));
            }
        }
        Ok(())
    }
}
