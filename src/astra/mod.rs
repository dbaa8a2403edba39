//! Client for the Astra DB JSON Data API.
//!
//! Only the vector `find` command is used: the search term is embedded
//! server-side through `$vectorize` and the closest documents come back
//! ordered by similarity.

pub mod client;
pub mod types;

pub use client::{AstraClient, TOKEN_HEADER};
pub use types::{Document, FindCommand, FindResponse, SEARCH_LIMIT};
