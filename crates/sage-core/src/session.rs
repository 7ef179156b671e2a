//! Session identity and summaries.
//!
//! A session is one chat conversation thread. The client names sessions with
//! short alphanumeric ids it generates itself, collision-checked against
//! every id the backend already knows.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Alphabet session ids are drawn from.
pub const SESSION_ID_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of a generated session id.
pub const SESSION_ID_LEN: usize = 10;

/// A session as listed in the past-chats sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Opaque session identifier.
    pub id: String,
    /// Human-readable session title ("" until the backend titles it).
    pub title: String,
    /// Last-activity timestamp reported by the backend, if any.
    pub last_active: Option<String>,
}

/// Generates a fresh session id guaranteed distinct from all known ids.
///
/// Draws 10 characters uniformly from the alphanumeric alphabet and retries
/// until the result collides with nothing in `existing` (rejection
/// sampling). With a 62^10 id space the loop terminates immediately in
/// practice.
pub fn generate_session_id(existing: &[String]) -> String {
    let mut rng = rand::thread_rng();
    loop {
        let id: String = (0..SESSION_ID_LEN)
            .map(|_| SESSION_ID_ALPHABET[rng.gen_range(0..SESSION_ID_ALPHABET.len())] as char)
            .collect();
        if !existing.iter().any(|known| *known == id) {
            return id;
        }
    }
}
