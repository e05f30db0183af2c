pub mod auth;
pub mod catalog;
pub mod goals;
pub mod library;
pub mod lists;
pub mod profile;
pub mod sessions;

pub use auth::*;
pub use catalog::*;
pub use goals::*;
pub use library::*;
pub use lists::*;
pub use profile::*;
pub use sessions::*;
