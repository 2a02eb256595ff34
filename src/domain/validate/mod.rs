//! Format validation applied once, at submission time, before a receipt is stored.

pub mod validator;

pub use validator::{validate_receipt, FieldError, ValidationErrors};
