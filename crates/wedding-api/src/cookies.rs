//! Admin session cookie
//!
//! Builds the `Set-Cookie` values that carry the admin session token.

/// Name of the session cookie
pub const ADMIN_COOKIE: &str = "admin_token";

/// Builder for session cookie header values
#[derive(Debug, Clone, Copy)]
pub struct SessionCookie {
    /// Add the `Secure` attribute (production only)
    secure: bool,
}

impl SessionCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// `Set-Cookie` value carrying `token` for `max_age` seconds
    pub fn issue(&self, token: &str, max_age: i64) -> String {
        self.with_attributes(format!(
            "{ADMIN_COOKIE}={token}; Path=/; Max-Age={max_age}"
        ))
    }

    /// `Set-Cookie` value that removes the session cookie
    pub fn clear(&self) -> String {
        self.with_attributes(format!(
            "{ADMIN_COOKIE}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
        ))
    }

    fn with_attributes(&self, mut cookie: String) -> String {
        cookie.push_str("; HttpOnly; SameSite=Strict");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}
