use tracing::{debug, info, warn};

use super::{HandleError, CONTENT_MISSING};
use crate::blog::{Blog, BlogUpdate, NewBlog};
use crate::store::BlogStore;

#[tracing::instrument(name = "list_blogs", skip(store), fields(count = tracing::field::Empty))]
pub async fn list_blogs<S: BlogStore + ?Sized>(store: &S) -> Result<Vec<Blog>, HandleError> {
    let blogs = store.find_all().await?;
    tracing::Span::current().record("count", blogs.len());
    Ok(blogs)
}

#[tracing::instrument(name = "create_blog", skip(payload, store))]
pub async fn create_blog<S: BlogStore + ?Sized>(
    payload: NewBlog,
    store: &S,
) -> Result<Blog, HandleError> {
    let Some(valid) = payload.validate() else {
        debug!("rejecting blog without title or url");
        return Err(HandleError::Validation(CONTENT_MISSING.to_string()));
    };

    let saved = store.insert(valid).await?;
    info!(id = %saved.id, title = %saved.title, "blog created");
    Ok(saved)
}

/// Deleting an unknown id still succeeds.
#[tracing::instrument(name = "delete_blog", skip(store))]
pub async fn delete_blog<S: BlogStore + ?Sized>(id: &str, store: &S) -> Result<(), HandleError> {
    match store.remove(id).await? {
        Some(removed) => info!(id, title = %removed.title, "blog deleted"),
        None => debug!(id, "delete for unknown blog"),
    }
    Ok(())
}

#[tracing::instrument(name = "update_blog", skip(update, store))]
pub async fn update_blog<S: BlogStore + ?Sized>(
    id: &str,
    update: BlogUpdate,
    store: &S,
) -> Result<Blog, HandleError> {
    match store.update(id, update).await? {
        Some(updated) => {
            info!(id, likes = updated.likes, "blog updated");
            Ok(updated)
        }
        None => {
            warn!(id, "update for unknown blog");
            Err(HandleError::NotFound("blog".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn payload(title: Option<&str>, url: Option<&str>, likes: Option<i64>) -> NewBlog {
        NewBlog {
            title: title.map(str::to_string),
            author: Some("Taras Shevcenko".to_string()),
            url: url.map(str::to_string),
            likes,
        }
    }

    #[tokio::test]
    async fn create_then_list() {
        let store = MemoryStore::new();
        let saved = create_blog(
            payload(Some("KNU SHEVCHENKO"), Some("knu.ua"), Some(122)),
            &store,
        )
        .await
        .unwrap();

        let all = list_blogs(&store).await.unwrap();
        assert_eq!(all, vec![saved]);
    }

    #[tokio::test]
    async fn create_without_url_stores_nothing() {
        let store = MemoryStore::new();
        let result = create_blog(payload(Some("Node.js Blog"), None, None), &store).await;

        assert!(matches!(result, Err(HandleError::Validation(_))));
        assert!(list_blogs(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        let saved = create_blog(payload(Some("t"), Some("u"), None), &store)
            .await
            .unwrap();

        delete_blog(&saved.id, &store).await.unwrap();
        delete_blog(&saved.id, &store).await.unwrap();
        assert!(list_blogs(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_unknown_blog_is_not_found() {
        let store = MemoryStore::new();
        let result = update_blog("missing", BlogUpdate::default(), &store).await;
        assert!(matches!(result, Err(HandleError::NotFound(_))));
    }
}
