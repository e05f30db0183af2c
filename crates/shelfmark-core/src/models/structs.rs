use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{GoalPeriod, GoalType, ReadingStatus};

/// Collection responses come back either as a bare array or wrapped by the
/// backend's page-number pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Page<T> {
    Paginated {
        count: u64,
        #[serde(default)]
        next: Option<String>,
        #[serde(default)]
        previous: Option<String>,
        results: Vec<T>,
    },
    Plain(Vec<T>),
}

impl<T> Page<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Plain(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paginated { results, .. } => results,
            Self::Plain(items) => items,
        }
    }

    /// Total number of matching records on the server, not just this page.
    pub fn total(&self) -> u64 {
        match self {
            Self::Paginated { count, .. } => *count,
            Self::Plain(items) => items.len() as u64,
        }
    }

    pub fn next(&self) -> Option<&str> {
        match self {
            Self::Paginated { next, .. } => next.as_deref(),
            Self::Plain(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Author,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBook {
    pub id: i64,
    pub book: Book,
    pub status: ReadingStatus,
    pub pages_read: u32,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl UserBook {
    pub fn pages_left(&self) -> u32 {
        self.book.total_pages.saturating_sub(self.pages_read)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryStats {
    pub total: u64,
    #[serde(rename = "lu")]
    pub read: u64,
    #[serde(rename = "en_cours")]
    pub reading: u64,
    #[serde(rename = "non_lu")]
    pub unread: u64,
    #[serde(rename = "pages_lues")]
    pub pages_read: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingGoal {
    pub id: i64,
    pub goal_type: GoalType,
    pub period: GoalPeriod,
    pub target: u32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub current_value: u32,
    #[serde(default)]
    pub progress_percentage: f64,
}

impl ReadingGoal {
    pub fn is_met(&self) -> bool {
        self.current_value >= self.target
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingList {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub books: Vec<UserBook>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingSession {
    pub id: i64,
    pub user_book: i64,
    #[serde(default)]
    pub book_title: String,
    pub date: NaiveDate,
    pub pages_read: u32,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryDay {
    pub date: NaiveDate,
    pub pages: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CumulativeDay {
    pub date: NaiveDate,
    pub pages: u32,
    pub total_pages: u64,
}

/// Running total of pages over a daily summary, in the order given.
pub fn cumulative_pages(summary: &[SummaryDay]) -> Vec<CumulativeDay> {
    summary
        .iter()
        .scan(0u64, |total, day| {
            *total += u64::from(day.pages);
            Some(CumulativeDay {
                date: day.date,
                pages: day.pages,
                total_pages: *total,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub favorite_genre: String,
}

/// Confirmation body returned by list membership actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionMessage {
    pub message: String,
}
