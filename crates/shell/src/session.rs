//! Session state machine: landing → authenticating → active.
//!
//! Implemented as a deterministic [`StateMachine`]: `handle` decides, `apply`
//! evolves. Commands that do not apply in the current state yield no events.
//!
//! Invariants held by construction:
//! - A role exists only inside `SessionState::Active`.
//! - Captured credentials live only inside a `Submit` command; the state never
//!   stores them.
//! - At most one submission is pending, and while it is, only its own
//!   completion is accepted.

use ewaste_auth::{
    AuthError, CredentialCapture, CredentialError, Role, SubmissionKind, validate_login,
    validate_signup,
};
use ewaste_core::{DomainError, StateMachine, SubmissionId};
use ewaste_navigation::{NavigationState, resolve};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level phase of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionView {
    Landing,
    Authenticating,
    Active,
}

/// Which form the authentication screen shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// A submission accepted by validation and awaiting its authenticator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTicket {
    pub submission_id: SubmissionId,
    /// Role selected immediately before submitting.
    pub role: Role,
    pub kind: SubmissionKind,
}

/// Local state of the authentication screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatingState {
    pub selected_role: Role,
    pub mode: AuthMode,
    pub pending: Option<PendingTicket>,
}

impl AuthenticatingState {
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Landing,
    Authenticating(AuthenticatingState),
    Active(NavigationState),
}

impl SessionState {
    pub fn view(&self) -> SessionView {
        match self {
            SessionState::Landing => SessionView::Landing,
            SessionState::Authenticating(_) => SessionView::Authenticating,
            SessionState::Active(_) => SessionView::Active,
        }
    }
}

#[derive(Debug)]
pub enum SessionCommand {
    GetStarted,
    /// Back from authentication, or back to landing from an active session.
    Back,
    SelectRole(Role),
    SwitchAuthMode(AuthMode),
    Submit {
        submission_id: SubmissionId,
        credentials: CredentialCapture,
    },
    Complete {
        submission_id: SubmissionId,
        outcome: Result<(), AuthError>,
    },
    Logout,
    ChangeTab(String),
    ToggleMenu,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    AuthenticationOpened { selected_role: Role, mode: AuthMode },
    ReturnedToLanding,
    RoleSelected(Role),
    AuthModeSwitched(AuthMode),
    SubmissionStarted(PendingTicket),
    Authenticated { role: Role, kind: SubmissionKind },
    SubmissionFailed { kind: SubmissionKind, error: AuthError },
    LoggedOut,
    TabChanged { tab_id: &'static str, fell_back: bool },
    MenuToggled,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMachine {
    state: SessionState,
    default_role: Role,
    default_mode: AuthMode,
    version: u64,
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new(Role::default(), AuthMode::default())
    }
}

impl SessionMachine {
    /// A fresh machine on the landing view.
    ///
    /// `default_role` and `default_mode` seed every authentication screen.
    pub fn new(default_role: Role, default_mode: AuthMode) -> Self {
        Self {
            state: SessionState::Landing,
            default_role,
            default_mode,
            version: 0,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> SessionView {
        self.state.view()
    }

    pub fn role(&self) -> Option<Role> {
        match &self.state {
            SessionState::Active(nav) => Some(nav.role()),
            _ => None,
        }
    }

    pub fn navigation(&self) -> Option<&NavigationState> {
        match &self.state {
            SessionState::Active(nav) => Some(nav),
            _ => None,
        }
    }

    pub fn authenticating(&self) -> Option<&AuthenticatingState> {
        match &self.state {
            SessionState::Authenticating(auth) => Some(auth),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingTicket> {
        self.authenticating().and_then(|auth| auth.pending.as_ref())
    }

    fn handle_landing(&self, command: &SessionCommand) -> Result<Vec<SessionEvent>, SessionError> {
        match command {
            SessionCommand::GetStarted => Ok(vec![SessionEvent::AuthenticationOpened {
                selected_role: self.default_role,
                mode: self.default_mode,
            }]),
            SessionCommand::Complete { submission_id, .. } => Err(stale(*submission_id)),
            _ => Ok(vec![]),
        }
    }

    fn handle_pending(
        &self,
        ticket: &PendingTicket,
        command: &SessionCommand,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        match command {
            SessionCommand::Complete {
                submission_id,
                outcome,
            } => {
                if *submission_id != ticket.submission_id {
                    return Err(stale(*submission_id));
                }
                match outcome {
                    Ok(()) => Ok(vec![SessionEvent::Authenticated {
                        role: ticket.role,
                        kind: ticket.kind,
                    }]),
                    Err(error) => Ok(vec![SessionEvent::SubmissionFailed {
                        kind: ticket.kind,
                        error: error.clone(),
                    }]),
                }
            }
            // Re-entrant submits and every other intent are dropped while pending.
            _ => Ok(vec![]),
        }
    }

    fn handle_authenticating(
        &self,
        auth: &AuthenticatingState,
        command: &SessionCommand,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        if let Some(ticket) = &auth.pending {
            return self.handle_pending(ticket, command);
        }

        match command {
            SessionCommand::Back => Ok(vec![SessionEvent::ReturnedToLanding]),
            SessionCommand::SelectRole(role) if *role != auth.selected_role => {
                Ok(vec![SessionEvent::RoleSelected(*role)])
            }
            SessionCommand::SwitchAuthMode(mode) if *mode != auth.mode => {
                Ok(vec![SessionEvent::AuthModeSwitched(*mode)])
            }
            SessionCommand::Submit {
                submission_id,
                credentials,
            } => {
                match credentials {
                    CredentialCapture::Login(form) => validate_login(form)?,
                    CredentialCapture::Signup(form) => validate_signup(form)?,
                }
                Ok(vec![SessionEvent::SubmissionStarted(PendingTicket {
                    submission_id: *submission_id,
                    role: auth.selected_role,
                    kind: credentials.kind(),
                })])
            }
            SessionCommand::Complete { submission_id, .. } => Err(stale(*submission_id)),
            _ => Ok(vec![]),
        }
    }

    fn handle_active(
        &self,
        nav: &NavigationState,
        command: &SessionCommand,
    ) -> Result<Vec<SessionEvent>, SessionError> {
        match command {
            SessionCommand::Logout | SessionCommand::Back => Ok(vec![SessionEvent::LoggedOut]),
            SessionCommand::ChangeTab(requested) => {
                let resolution = resolve(nav.role(), requested);
                Ok(vec![SessionEvent::TabChanged {
                    tab_id: resolution.tab_id(),
                    fell_back: resolution.fell_back,
                }])
            }
            SessionCommand::ToggleMenu => Ok(vec![SessionEvent::MenuToggled]),
            SessionCommand::Complete { submission_id, .. } => Err(stale(*submission_id)),
            _ => Ok(vec![]),
        }
    }
}

fn stale(submission_id: SubmissionId) -> SessionError {
    SessionError::Domain(DomainError::conflict(format!(
        "submission {submission_id} is not pending"
    )))
}

impl StateMachine for SessionMachine {
    type Command = SessionCommand;
    type Event = SessionEvent;
    type Error = SessionError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            SessionEvent::AuthenticationOpened {
                selected_role,
                mode,
            } => {
                self.state = SessionState::Authenticating(AuthenticatingState {
                    selected_role: *selected_role,
                    mode: *mode,
                    pending: None,
                });
            }
            SessionEvent::ReturnedToLanding | SessionEvent::LoggedOut => {
                self.state = SessionState::Landing;
            }
            SessionEvent::RoleSelected(role) => {
                if let SessionState::Authenticating(auth) = &mut self.state {
                    auth.selected_role = *role;
                }
            }
            SessionEvent::AuthModeSwitched(mode) => {
                if let SessionState::Authenticating(auth) = &mut self.state {
                    auth.mode = *mode;
                }
            }
            SessionEvent::SubmissionStarted(ticket) => {
                if let SessionState::Authenticating(auth) = &mut self.state {
                    auth.pending = Some(*ticket);
                }
            }
            SessionEvent::Authenticated { role, .. } => {
                self.state = SessionState::Active(NavigationState::new(*role));
            }
            SessionEvent::SubmissionFailed { .. } => {
                if let SessionState::Authenticating(auth) = &mut self.state {
                    auth.pending = None;
                }
            }
            SessionEvent::TabChanged { tab_id, .. } => {
                if let SessionState::Active(nav) = &mut self.state {
                    nav.request_tab(tab_id);
                }
            }
            SessionEvent::MenuToggled => {
                if let SessionState::Active(nav) = &mut self.state {
                    nav.toggle_menu();
                }
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match &self.state {
            SessionState::Landing => self.handle_landing(command),
            SessionState::Authenticating(auth) => self.handle_authenticating(auth, command),
            SessionState::Active(nav) => self.handle_active(nav, command),
        }
    }
}
