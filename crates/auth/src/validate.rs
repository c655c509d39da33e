//! Pure validation of the credential forms.
//!
//! - No IO
//! - No panics
//! - First failing check wins (no accumulation)

use thiserror::Error;

use crate::credentials::{FieldName, LoginCredentials, SignupProfile};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CredentialError {
    #[error("required field '{0}' is empty")]
    MissingField(FieldName),

    #[error("password and confirmation do not match")]
    PasswordMismatch,

    #[error("terms and conditions not accepted")]
    TermsNotAccepted,
}

impl CredentialError {
    /// The one message shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            CredentialError::MissingField(_) => "Please fill in all required fields",
            CredentialError::PasswordMismatch => "Passwords do not match",
            CredentialError::TermsNotAccepted => "Please agree to the terms and conditions",
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn first_missing<'a>(
    fields: impl IntoIterator<Item = (FieldName, &'a str)>,
) -> Option<FieldName> {
    fields
        .into_iter()
        .find(|(_, value)| is_blank(value))
        .map(|(name, _)| name)
}

/// Validate the login form: email and password must be non-blank.
pub fn validate_login(form: &LoginCredentials) -> Result<(), CredentialError> {
    let missing = first_missing([
        (FieldName::Email, form.email.as_str()),
        (FieldName::Password, form.password.as_str()),
    ]);

    match missing {
        Some(field) => Err(CredentialError::MissingField(field)),
        None => Ok(()),
    }
}

/// Validate the signup form.
///
/// Checks run in a fixed order: required fields, password confirmation,
/// terms acceptance. Phone and organization are optional.
pub fn validate_signup(form: &SignupProfile) -> Result<(), CredentialError> {
    if let Some(field) = first_missing([
        (FieldName::FirstName, form.first_name.as_str()),
        (FieldName::LastName, form.last_name.as_str()),
        (FieldName::Email, form.email.as_str()),
        (FieldName::Password, form.password.as_str()),
        (FieldName::ConfirmPassword, form.confirm_password.as_str()),
    ]) {
        return Err(CredentialError::MissingField(field));
    }

    if form.password != form.confirm_password {
        return Err(CredentialError::PasswordMismatch);
    }

    if !form.agree_to_terms {
        return Err(CredentialError::TermsNotAccepted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_signup() -> SignupProfile {
        SignupProfile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            organization: None,
            password: "engine".into(),
            confirm_password: "engine".into(),
            agree_to_terms: true,
        }
    }

    #[test]
    fn login_requires_email_and_password() {
        let err = validate_login(&LoginCredentials::new("a@b.com", "")).unwrap_err();
        assert_eq!(err, CredentialError::MissingField(FieldName::Password));

        let err = validate_login(&LoginCredentials::new("", "secret")).unwrap_err();
        assert_eq!(err, CredentialError::MissingField(FieldName::Email));
    }

    #[test]
    fn login_treats_whitespace_as_blank() {
        let err = validate_login(&LoginCredentials::new("   ", "secret")).unwrap_err();
        assert_eq!(err, CredentialError::MissingField(FieldName::Email));
    }

    #[test]
    fn login_accepts_any_non_blank_content() {
        assert!(validate_login(&LoginCredentials::new("not-an-email", "x")).is_ok());
    }

    #[test]
    fn signup_accepts_complete_profile() {
        assert!(validate_signup(&complete_signup()).is_ok());
    }

    #[test]
    fn signup_missing_field_wins_over_mismatch() {
        let form = SignupProfile {
            first_name: String::new(),
            confirm_password: "different".into(),
            agree_to_terms: false,
            ..complete_signup()
        };
        assert_eq!(
            validate_signup(&form).unwrap_err(),
            CredentialError::MissingField(FieldName::FirstName)
        );
    }

    #[test]
    fn signup_reports_first_missing_field_in_order() {
        let form = SignupProfile {
            last_name: String::new(),
            confirm_password: String::new(),
            ..complete_signup()
        };
        assert_eq!(
            validate_signup(&form).unwrap_err(),
            CredentialError::MissingField(FieldName::LastName)
        );
    }

    #[test]
    fn signup_mismatch_wins_over_terms() {
        let form = SignupProfile {
            confirm_password: "engine2".into(),
            agree_to_terms: false,
            ..complete_signup()
        };
        assert_eq!(validate_signup(&form).unwrap_err(), CredentialError::PasswordMismatch);
    }

    #[test]
    fn signup_requires_terms() {
        let form = SignupProfile {
            agree_to_terms: false,
            ..complete_signup()
        };
        assert_eq!(validate_signup(&form).unwrap_err(), CredentialError::TermsNotAccepted);
    }

    #[test]
    fn signup_optional_fields_stay_optional() {
        let form = SignupProfile {
            phone: String::new(),
            organization: None,
            ..complete_signup()
        };
        assert!(validate_signup(&form).is_ok());
    }

    #[test]
    fn each_failure_has_a_distinct_user_message() {
        let messages = [
            CredentialError::MissingField(FieldName::Email).user_message(),
            CredentialError::PasswordMismatch.user_message(),
            CredentialError::TermsNotAccepted.user_message(),
        ];
        assert_eq!(messages[0], "Please fill in all required fields");
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: non-blank email and password always pass.
            #[test]
            fn login_passes_for_non_blank_fields(
                email in "[ ]{0,2}[A-Za-z0-9@._-]{1,40}[ ]{0,2}",
                password in "[ -~]{0,5}[!-~][ -~]{0,20}",
            ) {
                prop_assert!(validate_login(&LoginCredentials::new(email, password)).is_ok());
            }

            /// Property: blank password always fails with MissingField.
            #[test]
            fn login_fails_for_blank_password(
                email in "[A-Za-z0-9@.]{1,40}",
                password in "[ \t]{0,4}",
            ) {
                prop_assert_eq!(
                    validate_login(&LoginCredentials::new(email, password)),
                    Err(CredentialError::MissingField(FieldName::Password))
                );
            }
        }
    }
}
