//! Saved-flag endpoints: bookmark, unbookmark, list bookmarks.

use axum::{
    extract::{Path, State},
    Json,
};

use super::ApiResult;
use crate::models::{Article, ArticleFilter};
use crate::AppState;

/// PUT /save/{id} - Mark an article as saved.
pub async fn mark_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Article> {
    let article = state.repo.set_saved(&id, true).await?;
    Ok(Json(article))
}

/// GET /save - List saved articles.
pub async fn list_saved(State(state): State<AppState>) -> ApiResult<Vec<Article>> {
    let articles = state.repo.list_articles(ArticleFilter::Saved(true)).await?;
    Ok(Json(articles))
}

/// PUT /delete/{id} - Clear the saved flag on an article.
pub async fn unmark_saved(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Article> {
    let article = state.repo.set_saved(&id, false).await?;
    Ok(Json(article))
}
