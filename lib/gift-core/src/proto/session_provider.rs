#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SessionProvider: Send + Sync {
    fn session(&self) -> Option<Session>;
}

pub struct NoSessionProvider;

impl SessionProvider for NoSessionProvider {
    fn session(&self) -> Option<Session> {
        None
    }
}

/// Identity of the caller, as resolved by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub admin: bool,
}
