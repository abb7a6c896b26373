// src/aggregator/mod.rs
//! Aggregate statistics over in-memory blog records.

mod stats;

pub use stats::{
    favorite_blog, most_blogs, most_likes, total_likes, AuthorTallies, AuthorTally, FavoriteBlog,
    MostBlogs, MostLikes,
};

/// Returned when a statistic that selects a record or author is asked about an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInputError;

impl std::fmt::Display for EmptyInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no blogs to aggregate")
    }
}

impl std::error::Error for EmptyInputError {}
