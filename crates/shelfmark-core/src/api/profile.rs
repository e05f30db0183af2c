use std::path::PathBuf;

/// Profile changes are sent as multipart so an avatar file can ride along.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub bio: Option<String>,
    pub favorite_genre: Option<String>,
    pub avatar: Option<PathBuf>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.bio.is_none() && self.favorite_genre.is_none() && self.avatar.is_none()
    }
}
