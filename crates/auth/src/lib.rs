//! `ewaste-auth` — credential capture, validation and the authentication seam.
//!
//! This crate is intentionally decoupled from rendering and transport.

pub mod authenticator;
pub mod credentials;
pub mod roles;
pub mod validate;

pub use authenticator::{
    AuthError, AuthFuture, AuthRequest, Authenticator, SimulatedAuthenticator,
    DEFAULT_SUBMIT_DELAY,
};
pub use credentials::{CredentialCapture, FieldName, LoginCredentials, SignupProfile, SubmissionKind};
pub use roles::Role;
pub use validate::{CredentialError, validate_login, validate_signup};
