// src/lib.rs
pub mod aggregator;
pub mod blog;
pub mod cli;
mod handler;
pub mod native;
pub mod stats;
pub mod store;

// Re-export tracing for use in other modules
pub use tracing;

pub use blog::{Blog, BlogRecord, BlogUpdate, NewBlog};
pub use handler::{
    create_blog, delete_blog, list_blogs, update_blog, ErrorBody, HandleError, CONTENT_MISSING,
};
pub use native::{build_router, build_router_with_store};
pub use store::{BlogStore, MemoryStore, StoreError};
