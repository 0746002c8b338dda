use crate::models::SortDirection;

/// 可排序的列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    RatingScore,
    ReleaseDate,
}

impl SortColumn {
    pub fn column_name(&self) -> &'static str {
        match self {
            SortColumn::Id => "id",
            SortColumn::RatingScore => "rating_score",
            SortColumn::ReleaseDate => "release_date",
        }
    }

    /// 公开排序键到列的映射，大小写敏感；未知键一律回落到 id
    pub fn from_sort_key(key: Option<&str>) -> Self {
        match key {
            Some("averageRating") => SortColumn::RatingScore,
            Some("releaseDate") => SortColumn::ReleaseDate,
            _ => SortColumn::Id,
        }
    }
}

/// 单列排序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// 热门列表的固定排序：评分从高到低
    pub fn by_popularity() -> Self {
        Self::new(SortColumn::RatingScore, SortDirection::Descending)
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::new(SortColumn::Id, SortDirection::Ascending)
    }
}

/// 根据请求的排序键和方向生成排序规则，永不失败
pub fn build_sort_order(sort_key: Option<&str>, direction: Option<SortDirection>) -> SortOrder {
    SortOrder::new(
        SortColumn::from_sort_key(sort_key),
        direction.unwrap_or_default(),
    )
}
