//! Credential helpers: one-way password digest and username shape
//! validation. SHA-256 without salt mirrors the original demo; this is
//! not meant to guard anything more valuable than demo history.

use regex::Regex;
use sha2::{Digest, Sha256};
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 4;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").unwrap());

/// Lowercase hex SHA-256 digest of the plaintext, compared verbatim at
/// login.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Usernames are case-sensitive map keys; keep them to a shape that
/// also survives as an XML attribute value.
pub fn valid_username(username: &str) -> bool {
    USERNAME_RE.is_match(username)
}
