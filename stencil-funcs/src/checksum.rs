use sha2::{Digest, Sha256, Sha512};

/// Returns the hex encoded SHA-256 digest of a string.
///
/// ```jinja
/// {{ "hello"|sha256sum }}
/// ```
pub fn sha256sum(value: &str) -> String {
    hex::encode(Sha256::digest(value.as_bytes()))
}

/// Returns the hex encoded SHA-512 digest of a string.
pub fn sha512sum(value: &str) -> String {
    hex::encode(Sha512::digest(value.as_bytes()))
}
