// src/store/memory.rs
//! In-process blog collection, optionally mirrored to a JSON snapshot file.

use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::{new_id, BlogStore, StoreError};
use crate::blog::{Blog, BlogUpdate, ValidBlog};

pub struct MemoryStore {
    blogs: RwLock<Vec<Blog>>,
    snapshot: Option<PathBuf>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store that keeps nothing on disk.
    pub fn new() -> Self {
        Self {
            blogs: RwLock::new(Vec::new()),
            snapshot: None,
        }
    }

    /// Store seeded with `blogs`, nothing on disk.
    pub fn with_blogs(mut blogs: Vec<Blog>) -> Self {
        assign_missing_ids(&mut blogs);
        Self {
            blogs: RwLock::new(blogs),
            snapshot: None,
        }
    }

    /// Load the snapshot at `path` and rewrite it after every mutation.
    /// A missing file starts an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut blogs = load_snapshot(&path).await?;
        let assigned = assign_missing_ids(&mut blogs);
        info!(path = %path.display(), blogs = blogs.len(), "opened blog snapshot");

        let mut store = Self {
            blogs: RwLock::new(Vec::new()),
            snapshot: Some(path),
        };
        if assigned > 0 {
            warn!(assigned, "snapshot had blogs without ids, rewriting");
            store.persist(&blogs).await?;
        }
        *store.blogs.get_mut() = blogs;
        Ok(store)
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot.as_deref()
    }

    /// Called with the write guard held so the file matches the collection.
    async fn persist(&self, blogs: &[Blog]) -> Result<(), StoreError> {
        let Some(path) = &self.snapshot else {
            return Ok(());
        };

        let content = serde_json::to_string_pretty(blogs)
            .map_err(|e| StoreError::Io(format!("failed to serialize blogs: {}", e)))?;

        let tmp = temp_path(path);
        if let Err(e) = tokio::fs::write(&tmp, content).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io(format!(
                "failed to write {}: {}",
                tmp.display(),
                e
            )));
        }
        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(StoreError::Io(format!(
                "failed to replace {}: {}",
                path.display(),
                e
            )));
        }

        debug!(path = %path.display(), blogs = blogs.len(), "snapshot written");
        Ok(())
    }
}

/// Hidden sibling of `path` the snapshot is staged in before the rename.
fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "snapshot".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

/// Give a fresh id to every blog stored without one. Returns how many were assigned.
pub fn assign_missing_ids(blogs: &mut [Blog]) -> usize {
    let mut assigned = 0;
    for blog in blogs.iter_mut().filter(|b| b.id.is_empty()) {
        blog.id = new_id();
        assigned += 1;
    }
    assigned
}

/// Read a JSON array of blogs from `path`. A missing file reads as empty.
pub async fn load_snapshot(path: &Path) -> Result<Vec<Blog>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Io(format!(
                "failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content)
        .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))
}

#[async_trait::async_trait]
impl BlogStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Blog>, StoreError> {
        Ok(self.blogs.read().await.clone())
    }

    async fn insert(&self, blog: ValidBlog) -> Result<Blog, StoreError> {
        let blog = blog.into_blog(new_id());
        let mut blogs = self.blogs.write().await;
        blogs.push(blog.clone());
        if let Err(e) = self.persist(&blogs).await {
            blogs.pop();
            return Err(e);
        }
        Ok(blog)
    }

    async fn remove(&self, id: &str) -> Result<Option<Blog>, StoreError> {
        let mut blogs = self.blogs.write().await;
        let Some(pos) = blogs.iter().position(|b| b.id == id) else {
            return Ok(None);
        };

        let removed = blogs.remove(pos);
        if let Err(e) = self.persist(&blogs).await {
            blogs.insert(pos, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    async fn update(&self, id: &str, update: BlogUpdate) -> Result<Option<Blog>, StoreError> {
        let mut blogs = self.blogs.write().await;
        let Some(pos) = blogs.iter().position(|b| b.id == id) else {
            return Ok(None);
        };

        let previous = blogs[pos].clone();
        blogs[pos].apply(update);
        if let Err(e) = self.persist(&blogs).await {
            blogs[pos] = previous;
            return Err(e);
        }
        Ok(Some(blogs[pos].clone()))
    }

    async fn replace_all(&self, mut new_blogs: Vec<Blog>) -> Result<(), StoreError> {
        assign_missing_ids(&mut new_blogs);
        let mut blogs = self.blogs.write().await;
        let previous = std::mem::replace(&mut *blogs, new_blogs);
        if let Err(e) = self.persist(&blogs).await {
            *blogs = previous;
            return Err(e);
        }
        Ok(())
    }
}
