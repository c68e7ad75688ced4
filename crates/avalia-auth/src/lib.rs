//! # avalia-auth
//!
//! Authentication and authorization for Avalia.
//!
//! ## Modules
//!
//! - `jwt`: HS256 session token creation and validation
//! - `password`: Argon2id hashing and password policy
//! - `session`: credential login that issues session tokens
//! - `guard`: bearer token resolution to an active employee
//! - `policy`: who may read whose results

pub mod guard;
pub mod jwt;
pub mod password;
pub mod policy;
pub mod session;

pub use guard::AccessGuard;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use policy::AccessPolicy;
pub use session::{LoginResult, SessionIssuer};
