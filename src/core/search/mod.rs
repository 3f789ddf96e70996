//! Search module for lexical keyword retrieval.
//!
//! Queries are tokenized on whitespace and matched against chunk
//! content by case-insensitive substring containment. There is no
//! embedding or vector similarity.

mod engine;
mod query;

pub use engine::{SearchService, DEFAULT_MAX_RESULTS};
pub use query::{score_content, token_weight, tokenize};
