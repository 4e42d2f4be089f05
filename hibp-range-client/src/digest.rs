use sha1::{Digest, Sha1};

/// Hex lookup table for digest rendering.
const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Compute the SHA1 digest of a password and render it as 40 uppercase hex
/// characters, the form the range API deals in.
pub(crate) fn sha1_upper_hex(password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    let hash: [u8; 20] = hasher.finalize().into();

    let mut hex = String::with_capacity(hash.len() * 2);
    for byte in hash {
        hex.push(HEX_CHARS[(byte >> 4) as usize] as char);
        hex.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }

    hex
}
