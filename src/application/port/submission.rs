// SPDX-License-Identifier: MPL-2.0
//! Contact form delivery port.

use std::fmt;
use std::future::Future;

/// The contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    /// Returns whether every field is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.body]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// Reasons a submission can be rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The message could not reach its destination.
    Unreachable(String),

    /// The destination refused the message.
    Rejected(String),
}

impl fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionError::Unreachable(msg) => write!(f, "Submission unreachable: {msg}"),
            SubmissionError::Rejected(msg) => write!(f, "Submission rejected: {msg}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

/// Sends a contact message somewhere.
pub trait FormSubmitter {
    fn submit(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}
