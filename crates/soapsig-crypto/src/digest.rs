#![forbid(unsafe_code)]

//! SHA-512, the only digest of the legacy profile.

use digest::Digest;

/// Compute a SHA-512 digest in one shot.
pub fn sha512(data: &[u8]) -> Vec<u8> {
    sha2::Sha512::digest(data).to_vec()
}
