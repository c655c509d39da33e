//! Shell controller: UI intents in, snapshots and notices out.
//!
//! Single-threaded and event-driven. Every intent is applied synchronously;
//! the only asynchronous step is an accepted credential submission. The
//! controller keeps that submission in flight itself; the host drives it to
//! the end with [`ShellController::resolve_pending`].

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use ewaste_auth::{
    AuthError, AuthFuture, AuthRequest, Authenticator, CredentialCapture, CredentialError,
    LoginCredentials, Role, SignupProfile, SimulatedAuthenticator,
};
use ewaste_core::{StateMachine, SubmissionId};
use ewaste_navigation::{Surface, TabSpec};
use futures::FutureExt;
use serde::Serialize;

use crate::config::ShellConfig;
use crate::notice::Notice;
use crate::session::{
    AuthMode, PendingTicket, SessionCommand, SessionError, SessionEvent, SessionMachine,
    SessionState, SessionView,
};

/// Raised notices kept until the host drains them; older ones are dropped first.
pub const MAX_QUEUED_NOTICES: usize = 16;

/// A discrete user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    GetStarted,
    Back,
    SelectRole(Role),
    SwitchAuthMode(AuthMode),
    SubmitLogin(LoginCredentials),
    SubmitSignup(SignupProfile),
    Logout,
    ChangeTab(String),
    ToggleMenu,
}

impl Intent {
    fn name(&self) -> &'static str {
        match self {
            Intent::GetStarted => "get_started",
            Intent::Back => "back",
            Intent::SelectRole(_) => "select_role",
            Intent::SwitchAuthMode(_) => "switch_auth_mode",
            Intent::SubmitLogin(_) => "submit_login",
            Intent::SubmitSignup(_) => "submit_signup",
            Intent::Logout => "logout",
            Intent::ChangeTab(_) => "change_tab",
            Intent::ToggleMenu => "toggle_menu",
        }
    }
}

/// Result of dispatching an intent.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// State changed; listeners were notified.
    Applied,
    /// Not applicable in the current state (or a submission is pending).
    Ignored,
    /// Validation failed; one error notice was raised.
    Rejected(CredentialError),
    /// A submission is now in flight; drive it with `resolve_pending`.
    Submitted(SubmissionId),
}

impl Dispatch {
    pub fn is_applied(&self) -> bool {
        matches!(self, Dispatch::Applied)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Dispatch::Ignored)
    }
}

/// The in-flight authentication of one submission.
///
/// Owns the authenticator's future (and through it the credentials).
struct PendingSubmission {
    submission_id: SubmissionId,
    future: AuthFuture,
}

impl Future for PendingSubmission {
    type Output = Completion;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        this.future.poll_unpin(cx).map(|outcome| Completion {
            submission_id: this.submission_id,
            outcome,
        })
    }
}

struct Completion {
    submission_id: SubmissionId,
    outcome: Result<(), AuthError>,
}

/// Read model handed to the rendering layer.
///
/// `role`, `active_tab_id`, `resolved_surface` and the navigation chrome are
/// set only while `view == Active`; `auth_mode` and `selected_role` only
/// while `view == Authenticating`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellSnapshot {
    pub view: SessionView,
    pub role: Option<Role>,
    pub active_tab_id: Option<&'static str>,
    pub resolved_surface: Option<Surface>,
    pub active_tab_label: Option<&'static str>,
    pub portal_label: Option<&'static str>,
    /// Tabs of the role's navigation bar, in display order.
    pub tabs: &'static [TabSpec],
    pub auth_mode: Option<AuthMode>,
    pub selected_role: Option<Role>,
    pub submission_pending: bool,
    pub menu_open: bool,
}

impl ShellSnapshot {
    fn of(state: &SessionState) -> Self {
        let mut snapshot = Self {
            view: state.view(),
            role: None,
            active_tab_id: None,
            resolved_surface: None,
            active_tab_label: None,
            portal_label: None,
            tabs: &[],
            auth_mode: None,
            selected_role: None,
            submission_pending: false,
            menu_open: false,
        };
        match state {
            SessionState::Landing => {}
            SessionState::Authenticating(auth) => {
                snapshot.auth_mode = Some(auth.mode);
                snapshot.selected_role = Some(auth.selected_role);
                snapshot.submission_pending = auth.is_pending();
            }
            SessionState::Active(nav) => {
                let tab = nav.active_tab();
                snapshot.role = Some(nav.role());
                snapshot.active_tab_id = Some(tab.id);
                snapshot.resolved_surface = Some(tab.surface);
                snapshot.active_tab_label = Some(tab.label);
                snapshot.portal_label = Some(nav.navigation().portal_label);
                snapshot.tabs = nav.navigation().tabs;
                snapshot.menu_open = nav.menu_open();
            }
        }
        snapshot
    }
}

type Listener = Box<dyn FnMut(&ShellSnapshot)>;

pub struct ShellController<A = SimulatedAuthenticator> {
    machine: SessionMachine,
    authenticator: A,
    in_flight: Option<PendingSubmission>,
    notices: Vec<Notice>,
    listeners: Vec<Listener>,
}

impl ShellController<SimulatedAuthenticator> {
    /// Controller with the simulated fixed-delay authenticator.
    pub fn new(config: &ShellConfig) -> Self {
        Self::with_authenticator(config, SimulatedAuthenticator::new(config.submit_delay()))
    }
}

impl<A: Authenticator> ShellController<A> {
    pub fn with_authenticator(config: &ShellConfig, authenticator: A) -> Self {
        Self {
            machine: SessionMachine::new(config.default_role, config.default_auth_mode),
            authenticator,
            in_flight: None,
            notices: Vec::new(),
            listeners: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> ShellSnapshot {
        ShellSnapshot::of(self.machine.state())
    }

    /// Id of the submission in flight, if any.
    pub fn pending_submission(&self) -> Option<SubmissionId> {
        self.in_flight.as_ref().map(|pending| pending.submission_id)
    }

    /// Register a listener called with the new snapshot after every state change.
    pub fn subscribe(&mut self, listener: impl FnMut(&ShellSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Notices raised since the last drain, oldest first.
    ///
    /// At most [`MAX_QUEUED_NOTICES`] are retained.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Drain raised notices for display.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Landing surface callback.
    pub fn on_get_started(&mut self) -> Dispatch {
        self.dispatch(Intent::GetStarted)
    }

    /// Authentication surface callback.
    ///
    /// There is no `on_authenticated` counterpart: the surface dispatches
    /// `SubmitLogin`/`SubmitSignup`, and the session turns active once
    /// `resolve_pending` finishes the accepted submission.
    pub fn on_back(&mut self) -> Dispatch {
        self.dispatch(Intent::Back)
    }

    pub fn dispatch(&mut self, intent: Intent) -> Dispatch {
        let name = intent.name();
        let command = match intent {
            Intent::GetStarted => SessionCommand::GetStarted,
            Intent::Back => SessionCommand::Back,
            Intent::SelectRole(role) => SessionCommand::SelectRole(role),
            Intent::SwitchAuthMode(mode) => SessionCommand::SwitchAuthMode(mode),
            Intent::SubmitLogin(form) => SessionCommand::Submit {
                submission_id: SubmissionId::new(),
                credentials: CredentialCapture::Login(form),
            },
            Intent::SubmitSignup(form) => SessionCommand::Submit {
                submission_id: SubmissionId::new(),
                credentials: CredentialCapture::Signup(form),
            },
            Intent::Logout => SessionCommand::Logout,
            Intent::ChangeTab(tab) => SessionCommand::ChangeTab(tab),
            Intent::ToggleMenu => SessionCommand::ToggleMenu,
        };

        let events = match self.machine.execute(&command) {
            Ok(events) => events,
            Err(SessionError::Credential(error)) => {
                tracing::debug!(intent = name, %error, "submission rejected by validation");
                self.raise(Notice::error(error.user_message()));
                return Dispatch::Rejected(error);
            }
            Err(SessionError::Domain(error)) => {
                tracing::warn!(intent = name, %error, "intent conflicts with session state");
                return Dispatch::Ignored;
            }
        };

        if events.is_empty() {
            tracing::debug!(intent = name, view = ?self.machine.view(), "intent ignored");
            return Dispatch::Ignored;
        }

        tracing::debug!(intent = name, version = self.machine.version(), "intent applied");
        let started = self.react(&events);

        let dispatch = match (started, command) {
            (Some(ticket), SessionCommand::Submit { credentials, .. }) => {
                let future = self.authenticator.authenticate(AuthRequest {
                    role: ticket.role,
                    credentials,
                });
                self.in_flight = Some(PendingSubmission {
                    submission_id: ticket.submission_id,
                    future,
                });
                Dispatch::Submitted(ticket.submission_id)
            }
            _ => Dispatch::Applied,
        };
        self.notify();
        dispatch
    }

    /// Wait for the submission in flight and apply its outcome.
    ///
    /// Returns `Ignored` when nothing is in flight. Cancel-safe: dropping the
    /// returned future keeps the submission in flight for the next call.
    pub async fn resolve_pending(&mut self) -> Dispatch {
        let Some(pending) = self.in_flight.as_mut() else {
            return Dispatch::Ignored;
        };
        let completion = pending.await;
        self.in_flight = None;
        self.complete(completion)
    }

    /// Dispatch an intent and, if it starts a submission, resolve it.
    pub async fn submit_and_wait(&mut self, intent: Intent) -> Dispatch {
        match self.dispatch(intent) {
            Dispatch::Submitted(_) => self.resolve_pending().await,
            other => other,
        }
    }

    fn complete(&mut self, completion: Completion) -> Dispatch {
        let command = SessionCommand::Complete {
            submission_id: completion.submission_id,
            outcome: completion.outcome,
        };

        match self.machine.execute(&command) {
            Ok(events) if !events.is_empty() => {
                self.react(&events);
                self.notify();
                Dispatch::Applied
            }
            Ok(_) => Dispatch::Ignored,
            Err(error) => {
                tracing::warn!(
                    submission_id = %completion.submission_id,
                    %error,
                    "ignoring stale submission completion"
                );
                Dispatch::Ignored
            }
        }
    }

    fn raise(&mut self, notice: Notice) {
        if self.notices.len() >= MAX_QUEUED_NOTICES {
            self.notices.remove(0);
        }
        self.notices.push(notice);
    }

    /// Side effects of applied events. Returns the ticket of a newly started submission.
    fn react(&mut self, events: &[SessionEvent]) -> Option<PendingTicket> {
        let mut started = None;
        for event in events {
            match event {
                SessionEvent::SubmissionStarted(ticket) => {
                    tracing::debug!(
                        submission_id = %ticket.submission_id,
                        role = %ticket.role,
                        kind = ?ticket.kind,
                        "submission pending"
                    );
                    started = Some(*ticket);
                }
                SessionEvent::Authenticated { role, kind } => {
                    tracing::info!(%role, kind = ?kind, "session authenticated");
                    self.raise(Notice::welcome(*kind));
                }
                SessionEvent::SubmissionFailed { kind, error } => {
                    tracing::warn!(kind = ?kind, %error, "authentication failed");
                    self.raise(Notice::error(error.user_message()));
                }
                SessionEvent::LoggedOut => {
                    tracing::info!("session ended");
                }
                _ => {}
            }
        }
        started
    }

    fn notify(&mut self) {
        let snapshot = self.snapshot();
        for listener in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
