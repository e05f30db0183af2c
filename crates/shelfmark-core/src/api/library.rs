use serde::{Deserialize, Serialize};

use crate::models::ReadingStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddUserBookRequest {
    pub book_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserBookRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
}

impl UpdateUserBookRequest {
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.is_favorite.is_none() && self.rating.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRequest {
    pub pages_read: u32,
}

#[derive(Debug, Clone, Default)]
pub struct LibraryQuery {
    pub status: Option<ReadingStatus>,
    pub search: Option<String>,
}
