//! Article endpoints: listing, note-resolved lookup, note attachment.

use axum::{
    extract::{Path, State},
    Form, Json,
};

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{Article, ArticleFilter, ArticleWithNote, CreateNoteRequest};
use crate::AppState;

/// GET /articles - List all articles.
pub async fn list_articles(State(state): State<AppState>) -> ApiResult<Vec<Article>> {
    let articles = state.repo.list_articles(ArticleFilter::All).await?;
    Ok(Json(articles))
}

/// GET /articles/{id} - Get a single article with its note resolved.
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ArticleWithNote> {
    match state.repo.get_article_with_note(&id).await? {
        Some(article) => Ok(Json(article)),
        None => Err(AppError::NotFound(format!("Article {} not found", id))),
    }
}

/// POST /articles/{id} - Attach a note to an article from the submitted form.
///
/// A fresh note row is written on every submit and the article is repointed
/// at it; a previously referenced note stays behind unreferenced.
/// TODO: update the referenced note in place instead of orphaning the old row.
pub async fn attach_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(request): Form<CreateNoteRequest>,
) -> ApiResult<Article> {
    let note = state.repo.create_note(&request).await?;
    let article = state.repo.attach_note(&id, &note.id).await?;
    Ok(Json(article))
}
