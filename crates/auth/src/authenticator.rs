//! The seam between a validated submission and whatever confirms it.
//!
//! There is no backend: `SimulatedAuthenticator` waits a fixed delay and
//! accepts. A networked implementation plugs in behind the same trait.

use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use thiserror::Error;

use crate::credentials::{CredentialCapture, SubmissionKind};
use crate::roles::Role;

/// Latency the original product simulated for every accepted submission.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Unavailable(_) => {
                "Authentication service unavailable; please retry".to_string()
            }
        }
    }
}

/// A validated submission handed to the authenticator.
///
/// The request owns the captured form; once the returned future resolves the
/// credentials are dropped with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub role: Role,
    pub credentials: CredentialCapture,
}

impl AuthRequest {
    pub fn kind(&self) -> SubmissionKind {
        self.credentials.kind()
    }
}

pub type AuthFuture = BoxFuture<'static, Result<(), AuthError>>;

/// Confirms a validated submission.
///
/// The returned future must not borrow the authenticator, so the shell can keep
/// accepting (and ignoring) intents while it is pending.
pub trait Authenticator {
    fn authenticate(&self, request: AuthRequest) -> AuthFuture;
}

/// Accepts every request after a fixed delay.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl Authenticator for SimulatedAuthenticator {
    fn authenticate(&self, request: AuthRequest) -> AuthFuture {
        let delay = self.delay;
        async move {
            tracing::debug!(
                role = %request.role,
                kind = ?request.kind(),
                delay_ms = delay.as_millis() as u64,
                "simulating authentication round trip"
            );
            tokio::time::sleep(delay).await;
            drop(request);
            Ok(())
        }
        .boxed()
    }
}
