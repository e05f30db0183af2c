/// Session lifecycle notifications broadcast by [`crate::ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    Refreshed,
    LoggedOut,
    /// Tokens were cleared because the session could not be recovered.
    Expired { redirect_to: String },
}
