// 搜索查询计划
//
// 把 SearchCriteria 转成一组按固定顺序排列的谓词 + 单列排序 + 分页窗口。
// 纯计算，不做任何 I/O，由存储层负责翻译执行。

use chrono::NaiveDate;

use super::date_range::{BoundRole, DateBound, InvalidDateFormat};
use super::sort_order::{build_sort_order, SortOrder};
use crate::models::{Movie, SearchCriteria};

/// 搜索结果固定只取第一页的10条
pub const SEARCH_PAGE_SIZE: i64 = 10;

/// 标题匹配使用的大小写折叠，按 Unicode 规则转小写。
///
/// 存储层的 `title_search` 列也由它生成，两边必须一致。
pub fn fold_title(text: &str) -> String {
    text.to_lowercase()
}

/// 单个过滤条件
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// 标题包含查询词（查询词已经过 fold_title）
    TitleContains(String),
    /// release_date >= 日期
    ReleasedOnOrAfter(NaiveDate),
    /// release_date <= 日期
    ReleasedOnOrBefore(NaiveDate),
    /// rating_score >= 评分
    MinRating(f64),
}

impl Predicate {
    fn release_bound(bound: DateBound) -> Self {
        match bound.role {
            BoundRole::Start => Predicate::ReleasedOnOrAfter(bound.date),
            BoundRole::End => Predicate::ReleasedOnOrBefore(bound.date),
        }
    }

    /// 在内存中对单条记录求值，语义与 SQL 翻译保持一致
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            Predicate::TitleContains(term) => fold_title(&movie.title).contains(term.as_str()),
            Predicate::ReleasedOnOrAfter(date) => {
                movie.release_date.as_str() >= date.format("%Y-%m-%d").to_string().as_str()
            }
            Predicate::ReleasedOnOrBefore(date) => {
                movie.release_date.as_str() <= date.format("%Y-%m-%d").to_string().as_str()
            }
            // 评分为空的记录不满足任何下限
            Predicate::MinRating(min) => movie.rating_score.map_or(false, |score| score >= *min),
        }
    }
}

/// offset/limit 分页窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn first(limit: i64) -> Self {
        Self { offset: 0, limit }
    }

    /// 1-based 页码；调用方保证 page >= 1
    pub fn page(page: i64, size: i64) -> Self {
        Self {
            offset: (page - 1).saturating_mul(size),
            limit: size,
        }
    }
}

/// 一次搜索的完整查询计划
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub predicates: Vec<Predicate>,
    pub sort: SortOrder,
    pub window: PageWindow,
}

impl QueryPlan {
    pub fn matches(&self, movie: &Movie) -> bool {
        self.predicates.iter().all(|predicate| predicate.matches(movie))
    }
}

/// 构建搜索查询计划。
///
/// 标题条件必有；日期下限、日期上限、最低评分只有在提供时才加入，
/// 缺省的条件不会出现在计划中。任一日期解析失败则整个构建失败。
pub fn build_query_plan(criteria: &SearchCriteria) -> Result<QueryPlan, InvalidDateFormat> {
    let mut predicates = vec![Predicate::TitleContains(fold_title(&criteria.query))];

    if let Some(raw) = non_empty(&criteria.release_date_from) {
        let bound = DateBound::resolve(raw, BoundRole::Start)?;
        predicates.push(Predicate::release_bound(bound));
    }

    if let Some(raw) = non_empty(&criteria.release_date_to) {
        let bound = DateBound::resolve(raw, BoundRole::End)?;
        predicates.push(Predicate::release_bound(bound));
    }

    if let Some(min_rating) = criteria.min_rating {
        predicates.push(Predicate::MinRating(min_rating));
    }

    Ok(QueryPlan {
        predicates,
        sort: build_sort_order(criteria.sort_by.as_deref(), criteria.sort_direction),
        window: PageWindow::first(SEARCH_PAGE_SIZE),
    })
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
