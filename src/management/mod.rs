mod auth;
mod session;

pub use auth::CREDENTIALS_KEY;
pub use auth::CredentialStore;
pub use auth::EXPIRY_MARGIN_MS;
pub use auth::TOKEN_KEY;
pub use session::Session;
pub use session::SessionError;
