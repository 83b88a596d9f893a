pub mod client;
pub mod session;

pub use client::{AuthClient, AuthSession, SupabaseAuthClient};
pub use session::{CurrentSession, SessionContext, SessionStore};
