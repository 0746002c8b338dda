use super::validation::{NumberValidator, StringValidator, ValidationError, Validator};

/// 单次搜索请求的条件，构建后不可变
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    pub query: String,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub release_date_from: Option<String>,
    pub release_date_to: Option<String>,
    pub min_rating: Option<f64>,
}

impl SearchCriteria {
    /// 只带查询词的条件，其余全部缺省
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

impl Validator for SearchCriteria {
    type Error = ValidationError;

    fn validate(&self) -> Result<(), Self::Error> {
        StringValidator::validate_query(&self.query)?;
        NumberValidator::validate_min_rating(&self.min_rating)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = ValidationError;

    // 大小写不敏感：asc / ASC / Desc 都接受
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Ascending),
            "desc" => Ok(SortDirection::Descending),
            _ => Err(ValidationError::InvalidSortDirection(s.to_string())),
        }
    }
}
