use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRequest {
    pub title: String,
    pub author_id: i64,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    pub author: Option<i64>,
    pub search: Option<String>,
}
