//! Article model: one scraped story plus its bookkeeping fields.

use serde::{Deserialize, Serialize};

use super::Note;

/// A stored article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub is_saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_id: Option<String>,
    pub created_at: String,
}

/// An article with its note reference resolved into the full note.
///
/// The `note` field is always present on the wire (`null` when the article
/// has no note) because the browser page branches on it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleWithNote {
    pub id: String,
    pub title: String,
    pub link: String,
    pub description: String,
    pub is_saved: bool,
    pub note: Option<Note>,
    pub created_at: String,
}

/// A record produced by one matched container during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedArticle {
    pub title: String,
    pub link: String,
    pub description: String,
    pub is_saved: bool,
}

/// Filter for article listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleFilter {
    /// Every stored article
    All,
    /// Articles whose saved flag matches the given value
    Saved(bool),
}
