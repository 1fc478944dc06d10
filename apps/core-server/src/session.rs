use std::future::Future;

use gift_core::proto::session_provider::{Session, SessionProvider};

tokio::task_local! {
    static SESSION: Session;
}

/// Runs `future` with `session` as the identity of the current request.
pub(crate) async fn with_session<F: Future>(session: Session, future: F) -> F::Output {
    SESSION.scope(session, future).await
}

/// Reads the session established by [`crate::middleware::bearer_check`].
pub(crate) struct CoreServerSessionProvider;

impl SessionProvider for CoreServerSessionProvider {
    fn session(&self) -> Option<Session> {
        SESSION.try_with(Clone::clone).ok()
    }
}
