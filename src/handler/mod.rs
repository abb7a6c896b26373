use crate::aggregator::EmptyInputError;
use crate::store::StoreError;

mod blogs;

pub use blogs::{create_blog, delete_blog, list_blogs, update_blog};

/// Message returned when a create payload lacks a title or url.
pub const CONTENT_MISSING: &str = "content missing";

#[derive(Debug)]
pub enum HandleError {
    Validation(String),
    NotFound(String),
    NoData,
    Store(String),
}

impl std::fmt::Display for HandleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandleError::Validation(e) => write!(f, "{}", e),
            HandleError::NotFound(what) => write!(f, "{} not found", what),
            HandleError::NoData => write!(f, "no blogs"),
            HandleError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl std::error::Error for HandleError {}

impl From<StoreError> for HandleError {
    fn from(e: StoreError) -> Self {
        HandleError::Store(e.to_string())
    }
}

impl From<EmptyInputError> for HandleError {
    fn from(_: EmptyInputError) -> Self {
        HandleError::NoData
    }
}

/// JSON body sent alongside any failed request.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&HandleError> for ErrorBody {
    fn from(e: &HandleError) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}
