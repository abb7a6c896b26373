use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::aggregator::{FavoriteBlog, MostBlogs, MostLikes};
use crate::blog::{Blog, BlogUpdate, NewBlog};
use crate::handler::{self, ErrorBody, HandleError};
use crate::stats::{self, StatsQuery, StatsSummary, TotalLikes};
use crate::store::{BlogStore, MemoryStore};

pub type SharedStore = Arc<dyn BlogStore>;

/// Initialize tracing subscriber.
/// Uses RUST_LOG env var for filtering (defaults to info).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true))
        .with(filter)
        .init();
}

impl IntoResponse for HandleError {
    fn into_response(self) -> Response {
        let status = match &self {
            HandleError::Validation(_) => StatusCode::BAD_REQUEST,
            HandleError::NotFound(_) | HandleError::NoData => StatusCode::NOT_FOUND,
            HandleError::Store(e) => {
                error!(error = %e, "store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

/// Router over a fresh, empty in-memory store.
pub fn build_router() -> Router {
    build_router_with_store(Arc::new(MemoryStore::new()))
}

pub fn build_router_with_store(store: SharedStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/blogs", get(list_blogs_axum).post(create_blog_axum))
        .route(
            "/api/blogs/:id",
            put(update_blog_axum).delete(delete_blog_axum),
        )
        .route("/api/stats", get(summary_axum))
        .route("/api/stats/total-likes", get(total_likes_axum))
        .route("/api/stats/favorite", get(favorite_axum))
        .route("/api/stats/most-blogs", get(most_blogs_axum))
        .route("/api/stats/most-likes", get(most_likes_axum))
        .route("/health", get(|| async { "ok" }))
        .layer(cors)
        .with_state(store)
}

async fn list_blogs_axum(State(store): State<SharedStore>) -> Result<Json<Vec<Blog>>, HandleError> {
    handler::list_blogs(store.as_ref()).await.map(Json)
}

async fn create_blog_axum(
    State(store): State<SharedStore>,
    Json(payload): Json<NewBlog>,
) -> Result<(StatusCode, Json<Blog>), HandleError> {
    let saved = handler::create_blog(payload, store.as_ref()).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

async fn delete_blog_axum(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandleError> {
    handler::delete_blog(&id, store.as_ref()).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_blog_axum(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(update): Json<BlogUpdate>,
) -> Result<Json<Blog>, HandleError> {
    handler::update_blog(&id, update, store.as_ref())
        .await
        .map(Json)
}

async fn summary_axum(
    State(store): State<SharedStore>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsSummary>, HandleError> {
    stats::handle_summary(store.as_ref(), &query).await.map(Json)
}

async fn total_likes_axum(
    State(store): State<SharedStore>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<TotalLikes>, HandleError> {
    stats::handle_total_likes(store.as_ref(), &query)
        .await
        .map(Json)
}

async fn favorite_axum(
    State(store): State<SharedStore>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<FavoriteBlog>, HandleError> {
    stats::handle_favorite(store.as_ref(), &query).await.map(Json)
}

async fn most_blogs_axum(
    State(store): State<SharedStore>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<MostBlogs>, HandleError> {
    stats::handle_most_blogs(store.as_ref(), &query)
        .await
        .map(Json)
}

async fn most_likes_axum(
    State(store): State<SharedStore>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<MostLikes>, HandleError> {
    stats::handle_most_likes(store.as_ref(), &query)
        .await
        .map(Json)
}
