pub mod date_range;
pub mod error;
pub mod movie_service;
pub mod query_plan;
pub mod sort_order;

pub use date_range::{BoundRole, DateBound, InvalidDateFormat};
pub use error::{CatalogError, CatalogResult};
pub use movie_service::MovieQueryService;
pub use query_plan::{build_query_plan, fold_title, PageWindow, Predicate, QueryPlan};
pub use sort_order::{build_sort_order, SortColumn, SortOrder};
