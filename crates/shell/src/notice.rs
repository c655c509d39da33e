//! Transient user-visible messages (toasts).

use chrono::{DateTime, Utc};
use ewaste_auth::SubmissionKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub raised_at: DateTime<Utc>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            raised_at: Utc::now(),
        }
    }

    pub fn welcome(kind: SubmissionKind) -> Self {
        match kind {
            SubmissionKind::Login => Self::success("Login successful! Welcome to E-Waste Monitor"),
            SubmissionKind::Signup => {
                Self::success("Account created successfully! Welcome to E-Waste Monitor")
            }
        }
    }
}
