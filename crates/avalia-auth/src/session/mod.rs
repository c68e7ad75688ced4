//! Credential login.

pub mod issuer;

pub use issuer::{LoginResult, SessionIssuer};
