//! Stats API handlers computing aggregates over the stored blogs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::{self, FavoriteBlog, MostBlogs, MostLikes};
use crate::blog::{Blog, BlogRecord};
use crate::handler::HandleError;
use crate::store::BlogStore;

/// Query string accepted by every stats endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    /// Restrict the aggregate to blogs by this exact author.
    #[serde(default)]
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalLikes {
    pub likes: i128,
}

/// All four aggregates at once. Record-selecting fields are `None` for an empty collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    pub blogs: usize,
    pub total_likes: i128,
    pub favorite_blog: Option<FavoriteBlog>,
    pub most_blogs: Option<MostBlogs>,
    pub most_likes: Option<MostLikes>,
}

impl StatsSummary {
    pub fn from_blogs(blogs: &[Blog]) -> Self {
        let records = records(blogs);
        Self {
            blogs: records.len(),
            total_likes: aggregator::total_likes(&records),
            favorite_blog: aggregator::favorite_blog(&records).ok(),
            most_blogs: aggregator::most_blogs(&records).ok(),
            most_likes: aggregator::most_likes(&records).ok(),
        }
    }
}

fn records(blogs: &[Blog]) -> Vec<BlogRecord<'_>> {
    blogs.iter().map(Blog::record).collect()
}

async fn load<S: BlogStore + ?Sized>(
    store: &S,
    query: &StatsQuery,
) -> Result<Vec<Blog>, HandleError> {
    let mut blogs = store.find_all().await?;
    if let Some(author) = &query.author {
        blogs.retain(|b| b.author.as_deref() == Some(author.as_str()));
    }
    debug!(blogs = blogs.len(), author = ?query.author, "loaded blogs for stats");
    Ok(blogs)
}

/// GET /api/stats
pub async fn handle_summary<S: BlogStore + ?Sized>(
    store: &S,
    query: &StatsQuery,
) -> Result<StatsSummary, HandleError> {
    let blogs = load(store, query).await?;
    Ok(StatsSummary::from_blogs(&blogs))
}

/// GET /api/stats/total-likes
pub async fn handle_total_likes<S: BlogStore + ?Sized>(
    store: &S,
    query: &StatsQuery,
) -> Result<TotalLikes, HandleError> {
    let blogs = load(store, query).await?;
    Ok(TotalLikes {
        likes: aggregator::total_likes(&records(&blogs)),
    })
}

/// GET /api/stats/favorite
pub async fn handle_favorite<S: BlogStore + ?Sized>(
    store: &S,
    query: &StatsQuery,
) -> Result<FavoriteBlog, HandleError> {
    let blogs = load(store, query).await?;
    Ok(aggregator::favorite_blog(&records(&blogs))?)
}

/// GET /api/stats/most-blogs
pub async fn handle_most_blogs<S: BlogStore + ?Sized>(
    store: &S,
    query: &StatsQuery,
) -> Result<MostBlogs, HandleError> {
    let blogs = load(store, query).await?;
    Ok(aggregator::most_blogs(&records(&blogs))?)
}

/// GET /api/stats/most-likes
pub async fn handle_most_likes<S: BlogStore + ?Sized>(
    store: &S,
    query: &StatsQuery,
) -> Result<MostLikes, HandleError> {
    let blogs = load(store, query).await?;
    Ok(aggregator::most_likes(&records(&blogs))?)
}
