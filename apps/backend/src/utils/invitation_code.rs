//! Invitation code generation for rooms.
//!
//! Codes are 5 characters, each drawn independently and uniformly from the
//! 62 ASCII letters and digits. Uniqueness across rooms is not checked.

use rand::Rng;

pub const INVITATION_ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub const INVITATION_CODE_LEN: usize = 5;

/// Generate an invitation code from the thread-local RNG.
///
/// # Example
/// ```
/// use wordroom_backend::utils::invitation_code::generate_invitation_code;
///
/// let code = generate_invitation_code();
/// assert_eq!(code.len(), 5);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_invitation_code() -> String {
    generate_invitation_code_with(&mut rand::rng())
}

/// Generate an invitation code from the given RNG.
pub fn generate_invitation_code_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..INVITATION_CODE_LEN)
        .map(|_| INVITATION_ALPHABET[rng.random_range(0..INVITATION_ALPHABET.len())] as char)
        .collect()
}
