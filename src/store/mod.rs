// src/store/mod.rs
//! Document store for blogs.

mod memory;

pub use memory::MemoryStore;

use crate::blog::{Blog, BlogUpdate, ValidBlog};

/// Errors raised by a blog store.
#[derive(Debug)]
pub enum StoreError {
    /// Reading or writing the snapshot file failed.
    Io(String),
    /// The snapshot file did not contain a JSON array of blogs.
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store io error: {}", e),
            StoreError::Corrupt(e) => write!(f, "corrupt snapshot: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence for blog documents.
#[async_trait::async_trait]
pub trait BlogStore: Send + Sync {
    /// All blogs in insertion order.
    async fn find_all(&self) -> Result<Vec<Blog>, StoreError>;

    /// Store a validated blog and return it with its assigned id.
    async fn insert(&self, blog: ValidBlog) -> Result<Blog, StoreError>;

    /// Remove a blog. Unknown ids yield `Ok(None)`.
    async fn remove(&self, id: &str) -> Result<Option<Blog>, StoreError>;

    /// Apply an update and return the blog as stored afterwards.
    async fn update(&self, id: &str, update: BlogUpdate) -> Result<Option<Blog>, StoreError>;

    /// Replace the whole collection.
    async fn replace_all(&self, blogs: Vec<Blog>) -> Result<(), StoreError>;
}

/// Generate a document id: 12 random bytes as 24 lowercase hex characters.
pub fn new_id() -> String {
    let bytes: [u8; 12] = rand::random();
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_24_hex_chars() {
        let id = new_id();
        assert_eq!(id.len(), 24);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn new_ids_differ() {
        assert_ne!(new_id(), new_id());
    }
}
