//! Short codes - compact aliases used in shareable links

use rand::Rng;

/// Length of generated short codes
pub const SHORT_CODE_LEN: usize = 8;

// Uppercase letters and digits without the easily confused 0/O and 1/I.
const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Generate a random short code
pub fn generate_short_code() -> String {
    let mut rng = rand::thread_rng();
    (0..SHORT_CODE_LEN)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect()
}

/// Canonical form of a user-typed short code
pub fn normalize_short_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}
