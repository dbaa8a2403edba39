pub mod invocation;
pub mod search;

pub use invocation::invocation_handler;
pub use search::{clean_results, extract_search_term, search_handler, SearchResponse};
