//! Client-side checks that mirror the backend serializers, so obviously
//! invalid input is rejected before a round trip.

use chrono::NaiveDate;

use crate::api::{CreateGoalRequest, CreateSessionRequest, ListRequest, UpdateUserBookRequest};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("pages read ({pages_read}) cannot exceed the book's {total_pages} pages")]
    PagesReadExceedsTotal { pages_read: u32, total_pages: u32 },
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
    #[error("goal target must be strictly positive")]
    NonPositiveTarget,
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("name must not be empty")]
    EmptyName,
    #[error("a reading session must cover at least one page")]
    EmptySession,
}

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Rounded percentage of a book that has been read; 0 for books without pages.
pub fn progress_percent(pages_read: u32, total_pages: u32) -> u32 {
    if total_pages == 0 {
        return 0;
    }
    let ratio = f64::from(pages_read) / f64::from(total_pages);
    (ratio * 100.0).round() as u32
}

pub fn validate_pages_read(pages_read: u32, total_pages: Option<u32>) -> Result<(), ValidationError> {
    match total_pages {
        Some(total_pages) if pages_read > total_pages => {
            Err(ValidationError::PagesReadExceedsTotal {
                pages_read,
                total_pages,
            })
        }
        _ => Ok(()),
    }
}

pub fn validate_rating(rating: u8) -> Result<(), ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(ValidationError::RatingOutOfRange(rating))
    }
}

impl UpdateUserBookRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(rating) = self.rating {
            validate_rating(rating)?;
        }
        Ok(())
    }
}

impl CreateGoalRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.target == 0 {
            return Err(ValidationError::NonPositiveTarget);
        }
        if self.start_date > self.end_date {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }
}

impl ListRequest {
    /// Trims the name and rejects blank ones.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}

impl CreateSessionRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pages_read == 0 {
            return Err(ValidationError::EmptySession);
        }
        Ok(())
    }
}
