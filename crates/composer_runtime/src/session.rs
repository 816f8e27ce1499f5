//! Mock sign-in flow over the injected session repository.
//!
//! These functions hold the async half of authentication so they can run under
//! `futures::executor::block_on` in tests; the provider only maps their results onto signals.

use composer_core::{mock_user, AuthProvider, AuthState, User};
use platform_host::{next_local_id, SessionRepository, TimerService};
use thiserror::Error;

/// Failures talking to the session store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionFlowError {
    /// The stored user could not be read or decoded.
    #[error("session read failed: {0}")]
    Read(String),
    /// The user could not be written or removed.
    #[error("session write failed: {0}")]
    Write(String),
}

/// Result of a completed mock sign-in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInOutcome {
    /// User now signed in.
    pub user: User,
    /// Whether the user reached the session store. A failed write keeps the user signed in
    /// until the page reloads.
    pub persisted: Result<(), SessionFlowError>,
}

/// Reads the persisted user and maps it onto an [`AuthState`].
///
/// # Errors
///
/// Returns [`SessionFlowError::Read`] when the store fails or holds an undecodable record.
pub async fn restore_session(
    session: &SessionRepository<User>,
) -> Result<AuthState, SessionFlowError> {
    let stored = session.get().await.map_err(SessionFlowError::Read)?;
    Ok(stored.map_or(AuthState::SignedOut, AuthState::SignedIn))
}

/// Waits `delay_ms`, synthesizes the user for `provider`, and persists it.
pub async fn sign_in(
    session: &SessionRepository<User>,
    timer: &dyn TimerService,
    delay_ms: u32,
    provider: AuthProvider,
    email: Option<&str>,
) -> SignInOutcome {
    timer.sleep_ms(delay_ms).await;
    let user = mock_user(provider, email, next_local_id("user"));
    let persisted = session.set(&user).await.map_err(SessionFlowError::Write);
    SignInOutcome { user, persisted }
}

/// Removes the persisted user.
///
/// # Errors
///
/// Returns [`SessionFlowError::Write`] when the store rejects the delete.
pub async fn sign_out(session: &SessionRepository<User>) -> Result<(), SessionFlowError> {
    session.clear().await.map_err(SessionFlowError::Write)
}
