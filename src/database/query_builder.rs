use sqlx::{QueryBuilder, Sqlite};

use crate::services::query_plan::{PageWindow, Predicate, QueryPlan};
use crate::services::sort_order::SortOrder;

/// 动态查询构建器，把查询计划翻译成带参数绑定的 SQL
pub struct MovieQueryBuilder {
    query: QueryBuilder<'static, Sqlite>,
    has_where: bool,
}

impl MovieQueryBuilder {
    pub fn new() -> Self {
        let query = QueryBuilder::new("SELECT * FROM movies");
        Self {
            query,
            has_where: false,
        }
    }

    pub fn with_plan(self, plan: &QueryPlan) -> Self {
        self.with_predicates(&plan.predicates)
            .with_sorting(&plan.sort)
            .with_pagination(&plan.window)
    }

    pub fn with_predicates(mut self, predicates: &[Predicate]) -> Self {
        for predicate in predicates {
            self.add_where_clause();
            match predicate {
                // 查询词中的 LIKE 通配符按字面匹配；未建立搜索列的行退回 ASCII 折叠
                Predicate::TitleContains(term) => {
                    self.query.push("COALESCE(title_search, LOWER(title)) LIKE ");
                    self.query.push_bind(format!("%{}%", escape_like(term)));
                    self.query.push(" ESCAPE '\\'");
                }
                Predicate::ReleasedOnOrAfter(date) => {
                    self.query.push("release_date >= ");
                    self.query.push_bind(date.format("%Y-%m-%d").to_string());
                }
                Predicate::ReleasedOnOrBefore(date) => {
                    self.query.push("release_date <= ");
                    self.query.push_bind(date.format("%Y-%m-%d").to_string());
                }
                Predicate::MinRating(min_rating) => {
                    self.query.push("rating_score >= ");
                    self.query.push_bind(*min_rating);
                }
            }
        }

        self
    }

    pub fn with_sorting(mut self, sort: &SortOrder) -> Self {
        self.query.push(" ORDER BY ");
        self.query.push(sort.column.column_name());
        self.query.push(" ");
        self.query.push(sort.direction.as_sql());
        self
    }

    pub fn with_pagination(mut self, window: &PageWindow) -> Self {
        self.query.push(" LIMIT ");
        self.query.push_bind(window.limit);
        self.query.push(" OFFSET ");
        self.query.push_bind(window.offset);
        self
    }

    pub fn build(self) -> QueryBuilder<'static, Sqlite> {
        self.query
    }

    fn add_where_clause(&mut self) {
        if !self.has_where {
            self.query.push(" WHERE ");
            self.has_where = true;
        } else {
            self.query.push(" AND ");
        }
    }
}

impl Default for MovieQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
