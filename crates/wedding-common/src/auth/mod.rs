//! Admin authentication utilities

mod credentials;
mod jwt;
mod password;

pub use credentials::AdminCredentials;
pub use jwt::{Claims, JwtService, SessionToken};
pub use password::{hash_password, verify_password};
