//! Contact form field descriptors

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::state::validation::MESSAGE_MAX_CHARS;

/// One input of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 4] = [Field::FullName, Field::Email, Field::Phone, Field::Message];

    /// Wire name used in the JSON payload and error keys
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name *",
            Self::Email => "Email Address *",
            Self::Phone => "Phone Number *",
            Self::Message => "Message *",
        }
    }

    /// Hint shown while the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Email => "Enter your email address",
            Self::Phone => "Enter your phone number",
            Self::Message => "Enter your message (minimum 10 characters)",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }

    /// Input length cap in characters, if any
    pub fn max_chars(&self) -> Option<usize> {
        match self {
            Self::Message => Some(MESSAGE_MAX_CHARS),
            _ => None,
        }
    }

    /// Position in [`Field::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::FullName => 0,
            Self::Email => 1,
            Self::Phone => 2,
            Self::Message => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
