use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequest {
    pub name: String,
}

/// `book_id` is the id of an entry in the personal library, not a catalog
/// book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListBookRequest {
    pub book_id: i64,
}
