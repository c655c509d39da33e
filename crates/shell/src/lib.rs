//! `ewaste-shell`
//!
//! **Responsibility:** the application shell of the e-waste tracker.
//!
//! This crate provides:
//! - The session state machine (landing → authenticating → active)
//! - The controller that turns UI intents into transitions
//! - The read model handed to the rendering layer on every change
//!
//! Rendering is out of scope: panels receive a resolved
//! [`ShellSnapshot`] and report back only through [`Intent`]s.

pub mod config;
pub mod controller;
pub mod notice;
pub mod session;

pub use config::{ConfigError, ShellConfig};
pub use controller::{Dispatch, Intent, MAX_QUEUED_NOTICES, ShellController, ShellSnapshot};
pub use notice::{Notice, NoticeLevel};
pub use session::{
    AuthMode, AuthenticatingState, PendingTicket, SessionCommand, SessionError, SessionEvent,
    SessionMachine, SessionState, SessionView,
};
