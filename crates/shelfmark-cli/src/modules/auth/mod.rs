mod actions;
pub(crate) mod args;
mod store;

pub(crate) use actions::{handle_login, handle_logout, handle_register, handle_status};
pub(crate) use store::open_session_store;
