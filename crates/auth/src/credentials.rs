//! Transient form captures for the login and signup surfaces.
//!
//! These are value objects: the authentication surface rebuilds them as the
//! user types and hands them to the validators. They never outlive the
//! authentication phase, and their `Debug` output never shows secrets.

use ewaste_core::ValueObject;

/// Login form fields.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }
}

impl ValueObject for LoginCredentials {}

impl core::fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// Signup form fields.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct SignupProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub organization: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub agree_to_terms: bool,
}

impl ValueObject for SignupProfile {}

impl core::fmt::Debug for SignupProfile {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SignupProfile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("organization", &self.organization)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("agree_to_terms", &self.agree_to_terms)
            .finish()
    }
}

/// Form field identifiers, used to say which required field was empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::LastName => "last_name",
            FieldName::Email => "email",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirm_password",
        }
    }
}

impl core::fmt::Display for FieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionKind {
    Login,
    Signup,
}

/// A captured form of either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialCapture {
    Login(LoginCredentials),
    Signup(SignupProfile),
}

impl CredentialCapture {
    pub fn kind(&self) -> SubmissionKind {
        match self {
            CredentialCapture::Login(_) => SubmissionKind::Login,
            CredentialCapture::Signup(_) => SubmissionKind::Signup,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_passwords() {
        let login = LoginCredentials::new("a@b.com", "hunter2");
        let rendered = format!("{login:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));

        let signup = SignupProfile {
            password: "s3cret".into(),
            confirm_password: "s3cret-typo".into(),
            ..SignupProfile::default()
        };
        let rendered = format!("{signup:?}");
        assert!(!rendered.contains("s3cret"));
    }

    #[test]
    fn capture_reports_its_kind() {
        let login = CredentialCapture::Login(LoginCredentials::default());
        let signup = CredentialCapture::Signup(SignupProfile::default());
        assert_eq!(login.kind(), SubmissionKind::Login);
        assert_eq!(signup.kind(), SubmissionKind::Signup);
    }
}
