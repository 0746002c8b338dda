pub mod dto;
pub mod movie;
pub mod search;
pub mod validation;

pub use dto::{MovieDetailsResponse, MovieListResponse};
pub use movie::{Genre, Language, Movie};
pub use search::{SearchCriteria, SortDirection};
pub use validation::{NumberValidator, StringValidator, ValidationError, Validator};
