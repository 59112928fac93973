pub mod book_request;
pub mod search_query;

pub use book_request::*;
pub use search_query::*;
