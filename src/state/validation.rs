//! Field validators for the contact form
//!
//! All checks are pure and synchronous. Email and phone patterns see the raw
//! value; only the required and length checks trim. Both patterns are
//! intentionally permissive.

use super::forms::{ErrorMap, Field, FormData};
use regex::Regex;
use std::sync::LazyLock;

/// Minimum trimmed length for the full name
pub const NAME_MIN_CHARS: usize = 2;

/// Minimum trimmed length for the message
pub const MESSAGE_MIN_CHARS: usize = 10;

/// Maximum message length, enforced by input truncation
pub const MESSAGE_MAX_CHARS: usize = 1000;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s()-]{10,}$").expect("phone pattern is valid"));

/// Non-empty after trimming whitespace
pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose `local@domain.tld` shape check, matched anywhere in the value
pub fn validate_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Optional leading `+`, then at least 10 of digits, spaces, hyphens or parentheses
pub fn validate_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// At least two trimmed characters
pub fn validate_name_length(value: &str) -> bool {
    value.trim().chars().count() >= NAME_MIN_CHARS
}

/// At least ten trimmed characters
pub fn validate_message_length(value: &str) -> bool {
    value.trim().chars().count() >= MESSAGE_MIN_CHARS
}

/// Cut a value down to `max` characters (not bytes)
pub fn truncate_to_limit(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}

/// Check a single field, returning the message to show if it fails
pub fn validate_field(field: Field, value: &str) -> Option<&'static str> {
    let required = validate_required(value);
    match field {
        Field::FullName if !required => Some("Full name is required"),
        Field::FullName if !validate_name_length(value) => {
            Some("Full name must be at least 2 characters")
        }
        Field::Email if !required => Some("Email is required"),
        Field::Email if !validate_email(value) => Some("Please enter a valid email address"),
        Field::Phone if !required => Some("Phone number is required"),
        Field::Phone if !validate_phone(value) => {
            Some("Please enter a valid phone number (at least 10 digits)")
        }
        Field::Message if !required => Some("Message is required"),
        Field::Message if !validate_message_length(value) => {
            Some("Message must be at least 10 characters")
        }
        _ => None,
    }
}

/// Run every field check and collect the failures. An empty map means valid.
pub fn validate_form(data: &FormData) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for field in Field::ALL {
        if let Some(message) = validate_field(field, data.get(field)) {
            errors.insert(field, message.to_string());
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_data() -> FormData {
        FormData {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            message: "Hello there, analytical engine.".to_string(),
        }
    }

    mod required {
        use super::*;

        #[test]
        fn test_empty_fails() {
            assert!(!validate_required(""));
        }

        #[test]
        fn test_whitespace_only_is_empty() {
            assert!(!validate_required("   "));
            assert!(!validate_required("\t\n "));
        }

        #[test]
        fn test_text_passes() {
            assert!(validate_required(" x "));
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_passes() {
            assert!(validate_email("a@b.c"));
        }

        #[test]
        fn test_missing_at_fails() {
            assert!(!validate_email("abc"));
        }

        #[test]
        fn test_missing_dot_segment_fails() {
            assert!(!validate_email("a@b"));
        }

        #[test]
        fn test_shape_may_appear_inside_the_value() {
            assert!(validate_email("a b@c.d"));
            assert!(validate_email("  ada@example.com "));
        }

        #[test]
        fn test_whitespace_around_at_fails() {
            assert!(!validate_email("ada @ example.com"));
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_ten_digits_with_hyphens_passes() {
            assert!(validate_phone("123-456-7890"));
        }

        #[test]
        fn test_too_short_fails() {
            assert!(!validate_phone("12345"));
        }

        #[test]
        fn test_leading_plus_and_parentheses_pass() {
            assert!(validate_phone("+1 (555) 123-4567"));
        }

        #[test]
        fn test_letters_fail() {
            assert!(!validate_phone("555-CALL-NOW"));
        }

        #[test]
        fn test_plus_only_allowed_at_start() {
            assert!(!validate_phone("123+4567890"));
        }

        #[test]
        fn test_trailing_space_counts_toward_length() {
            assert!(validate_phone("123456789 "));
        }

        #[test]
        fn test_leading_space_before_plus_fails() {
            assert!(!validate_phone(" +1234567890"));
        }
    }

    mod lengths {
        use super::*;

        #[test]
        fn test_message_nine_chars_fails() {
            assert!(!validate_message_length("  123456789  "));
        }

        #[test]
        fn test_message_ten_chars_passes() {
            assert!(validate_message_length("1234567890"));
        }

        #[test]
        fn test_name_single_char_fails() {
            assert!(!validate_name_length(" A "));
            assert!(validate_name_length("Al"));
        }

        #[test]
        fn test_truncate_counts_chars() {
            assert_eq!(truncate_to_limit("héllo", 2), "hé");
            assert_eq!(truncate_to_limit("abc", 10), "abc");
        }
    }

    mod form {
        use super::*;

        #[test]
        fn test_valid_form_has_no_errors() {
            assert!(validate_form(&valid_data()).is_empty());
        }

        #[test]
        fn test_empty_form_flags_every_field() {
            let errors = validate_form(&FormData::default());
            assert_eq!(errors.len(), 4);
            assert_eq!(errors.get(Field::FullName), Some("Full name is required"));
            assert_eq!(errors.get(Field::Email), Some("Email is required"));
            assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
            assert_eq!(errors.get(Field::Message), Some("Message is required"));
        }

        #[test]
        fn test_empty_full_name_only() {
            let mut data = valid_data();
            data.full_name = "   ".to_string();
            let errors = validate_form(&data);
            assert_eq!(errors.len(), 1);
            assert!(errors.contains(Field::FullName));
        }

        #[test]
        fn test_shape_errors_use_specific_messages() {
            let mut data = valid_data();
            data.email = "abc".to_string();
            data.phone = "12345".to_string();
            data.message = "too short".to_string();
            let errors = validate_form(&data);
            assert_eq!(
                errors.get(Field::Email),
                Some("Please enter a valid email address")
            );
            assert_eq!(
                errors.get(Field::Phone),
                Some("Please enter a valid phone number (at least 10 digits)")
            );
            assert_eq!(
                errors.get(Field::Message),
                Some("Message must be at least 10 characters")
            );
        }

        #[test]
        fn test_validation_is_idempotent() {
            let samples = [
                valid_data(),
                FormData::default(),
                FormData {
                    full_name: "A".to_string(),
                    email: "a@b".to_string(),
                    phone: "+12".to_string(),
                    message: " ".to_string(),
                },
            ];
            for data in samples {
                assert_eq!(validate_form(&data), validate_form(&data));
            }
        }
    }
}
