//! Database repository for article and note operations.
//!
//! Uses prepared statements; identifiers are assigned here at creation time.

use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{
    Article, ArticleFilter, ArticleWithNote, CreateNoteRequest, Note, ScrapedArticle,
};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== ARTICLE OPERATIONS ====================

    /// Create a new article from one scraped record.
    pub async fn create_article(&self, record: &ScrapedArticle) -> Result<Article, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO articles (id, title, link, description, is_saved, note_id, created_at) VALUES (?, ?, ?, ?, ?, NULL, ?)"
        )
        .bind(&id)
        .bind(&record.title)
        .bind(&record.link)
        .bind(&record.description)
        .bind(record.is_saved as i32)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Article {
            id,
            title: record.title.clone(),
            link: record.link.clone(),
            description: record.description.clone(),
            is_saved: record.is_saved,
            note_id: None,
            created_at: now,
        })
    }

    /// List articles, optionally filtered on the saved flag.
    pub async fn list_articles(&self, filter: ArticleFilter) -> Result<Vec<Article>, AppError> {
        let rows = match filter {
            ArticleFilter::All => {
                sqlx::query(
                    "SELECT id, title, link, description, is_saved, note_id, created_at FROM articles ORDER BY created_at, id"
                )
                .fetch_all(&self.pool)
                .await?
            }
            ArticleFilter::Saved(flag) => {
                sqlx::query(
                    "SELECT id, title, link, description, is_saved, note_id, created_at FROM articles WHERE is_saved = ? ORDER BY created_at, id"
                )
                .bind(flag as i32)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows.iter().map(article_from_row).collect())
    }

    /// Get an article by ID.
    pub async fn get_article(&self, id: &str) -> Result<Option<Article>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, link, description, is_saved, note_id, created_at FROM articles WHERE id = ?"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(article_from_row))
    }

    /// Get an article by ID with its note reference resolved.
    pub async fn get_article_with_note(
        &self,
        id: &str,
    ) -> Result<Option<ArticleWithNote>, AppError> {
        let row = sqlx::query(
            r#"SELECT a.id, a.title, a.link, a.description, a.is_saved, a.created_at,
                      n.id AS note_id, n.title AS note_title, n.body AS note_body,
                      n.created_at AS note_created_at
               FROM articles a
               LEFT JOIN notes n ON n.id = a.note_id
               WHERE a.id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| {
            let is_saved: i32 = row.get("is_saved");
            let note_id: Option<String> = row.get("note_id");
            let note = note_id.map(|note_id| Note {
                id: note_id,
                title: row.get("note_title"),
                body: row.get("note_body"),
                created_at: row.get("note_created_at"),
            });
            ArticleWithNote {
                id: row.get("id"),
                title: row.get("title"),
                link: row.get("link"),
                description: row.get("description"),
                is_saved: is_saved != 0,
                note,
                created_at: row.get("created_at"),
            }
        }))
    }

    /// Set the saved flag on an article.
    pub async fn set_saved(&self, id: &str, saved: bool) -> Result<Article, AppError> {
        let result = sqlx::query("UPDATE articles SET is_saved = ? WHERE id = ?")
            .bind(saved as i32)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Article {} not found", id)));
        }

        self.get_article(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", id)))
    }

    // ==================== NOTE OPERATIONS ====================

    /// Create a new note.
    pub async fn create_note(&self, request: &CreateNoteRequest) -> Result<Note, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query("INSERT INTO notes (id, title, body, created_at) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&request.title)
            .bind(&request.body)
            .bind(&now)
            .execute(&self.pool)
            .await?;

        Ok(Note {
            id,
            title: request.title.clone(),
            body: request.body.clone(),
            created_at: now,
        })
    }

    /// Point an article's note reference at the given note.
    pub async fn attach_note(&self, article_id: &str, note_id: &str) -> Result<Article, AppError> {
        let result = sqlx::query("UPDATE articles SET note_id = ? WHERE id = ?")
            .bind(note_id)
            .bind(article_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Article {} not found",
                article_id
            )));
        }

        self.get_article(article_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Article {} not found", article_id)))
    }
}

// Helper functions for row conversion

fn article_from_row(row: &sqlx::sqlite::SqliteRow) -> Article {
    let is_saved: i32 = row.get("is_saved");
    Article {
        id: row.get("id"),
        title: row.get("title"),
        link: row.get("link"),
        description: row.get("description"),
        is_saved: is_saved != 0,
        note_id: row.get("note_id"),
        created_at: row.get("created_at"),
    }
}
