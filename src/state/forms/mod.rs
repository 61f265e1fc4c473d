//! Form domain layer
//!
//! Type-safe contact form handling, independent of rendering.

mod field;
mod form_state;

pub use field::Field;
pub use form_state::{
    ContactForm, ErrorMap, Form, FormButton, FormData, FormPhase, SubmitStatus, SubmitStep,
    MESSAGE_WARN_CHARS,
};
