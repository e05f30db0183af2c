pub(crate) mod auth;
pub(crate) mod authors;
pub(crate) mod books;
pub(crate) mod goals;
pub(crate) mod library;
pub(crate) mod lists;
pub(crate) mod profile;
pub(crate) mod sessions;
pub(crate) mod system;
