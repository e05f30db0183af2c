use serde::{Deserialize, Serialize};

/// Reading state of a book in the personal library. The backend keeps the
/// French wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingStatus {
    #[serde(rename = "non_lu")]
    Unread,
    #[serde(rename = "en_cours")]
    Reading,
    #[serde(rename = "lu")]
    Read,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Pages,
    Books,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

#[derive(Debug)]
pub struct EnumParseError {
    enum_name: &'static str,
    value: String,
}

impl EnumParseError {
    fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

impl std::fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} value: {}", self.enum_name, self.value)
    }
}

impl std::error::Error for EnumParseError {}

impl ReadingStatus {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unread => "non_lu",
            Self::Reading => "en_cours",
            Self::Read => "lu",
        }
    }

    /// Status the backend derives when a book's progress is saved.
    #[must_use]
    pub fn for_progress(pages_read: u32, total_pages: u32) -> Self {
        if pages_read >= total_pages {
            Self::Read
        } else if pages_read > 0 {
            Self::Reading
        } else {
            Self::Unread
        }
    }
}

impl std::str::FromStr for ReadingStatus {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "non_lu" | "unread" => Ok(Self::Unread),
            "en_cours" | "reading" => Ok(Self::Reading),
            "lu" | "read" => Ok(Self::Read),
            _ => Err(EnumParseError::new("reading_status", value)),
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GoalType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pages => "pages",
            Self::Books => "books",
        }
    }
}

impl std::str::FromStr for GoalType {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pages" => Ok(Self::Pages),
            "books" => Ok(Self::Books),
            _ => Err(EnumParseError::new("goal_type", value)),
        }
    }
}

impl GoalPeriod {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }
}

impl std::str::FromStr for GoalPeriod {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(EnumParseError::new("goal_period", value)),
        }
    }
}
