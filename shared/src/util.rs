//! Small helpers

use rand::Rng;

/// Length of a booking reference
pub const REFERENCE_LEN: usize = 10;

const REFERENCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random booking reference: 10 uppercase alphanumeric characters.
///
/// Uniqueness is enforced by the booking store, not here.
pub fn generate_reference() -> String {
    let mut rng = rand::thread_rng();
    (0..REFERENCE_LEN)
        .map(|_| REFERENCE_CHARSET[rng.gen_range(0..REFERENCE_CHARSET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_shape() {
        let reference = generate_reference();
        assert_eq!(reference.len(), REFERENCE_LEN);
        assert!(reference.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }
}
