/// Backend origin plus API prefix used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Where the user agent is sent once the session cannot be recovered.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

pub mod endpoints {
    pub const REGISTER: &str = "register/";
    pub const LOGIN: &str = "login/";
    pub const TOKEN_REFRESH: &str = "token/refresh/";
    pub const AUTHORS: &str = "authors/";
    pub const BOOKS: &str = "books/";
    pub const MY_BOOKS: &str = "my-books/";
    pub const MY_BOOKS_STATS: &str = "my-books/stats/";
    pub const GOALS: &str = "goals/";
    pub const LISTS: &str = "lists/";
    pub const READING_SESSIONS: &str = "reading-sessions/";
    pub const READING_SESSIONS_SUMMARY: &str = "reading-sessions/summary/";
    pub const PROFILE: &str = "profile/";

    /// `authors/`, 7 -> `authors/7/`
    pub fn detail(collection: &str, id: i64) -> String {
        format!("{}/{id}/", collection.trim_end_matches('/'))
    }

    /// `lists/`, 7, `add_book` -> `lists/7/add_book/`
    pub fn action(collection: &str, id: i64, action: &str) -> String {
        format!("{}/{id}/{}/", collection.trim_end_matches('/'), action)
    }
}
