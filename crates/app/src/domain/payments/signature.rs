//! Webhook signatures.
//!
//! Paystack signs each webhook body with HMAC-SHA512 keyed by the account's
//! secret key and sends the lowercase hex digest in `x-paystack-signature`.

use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

/// Header carrying the webhook signature.
pub const SIGNATURE_HEADER: &str = "x-paystack-signature";

/// Hex encoded HMAC-SHA512 of `payload`.
#[must_use]
pub fn sign(secret: &[u8], payload: &[u8]) -> String {
    let mut mac = new_mac(secret);

    mac.update(payload);

    hex::encode(mac.finalize().into_bytes())
}

/// Check `signature` against the HMAC of the exact bytes received.
///
/// The comparison runs in constant time. A signature that is not valid hex
/// (or has the wrong length) never verifies.
#[must_use]
pub fn verify(secret: &[u8], payload: &[u8], signature: &str) -> bool {
    let Ok(expected) = hex::decode(signature.trim()) else {
        return false;
    };

    let mut mac = new_mac(secret);

    mac.update(payload);

    mac.verify_slice(&expected).is_ok()
}

fn new_mac(secret: &[u8]) -> HmacSha512 {
    match HmacSha512::new_from_slice(secret) {
        Ok(mac) => mac,
        Err(_) => unreachable!("hmac accepts keys of any length"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"sk_test_secret";
    const BODY: &[u8] = br#"{"event":"charge.success","data":{"reference":"ref_1"}}"#;

    #[test]
    fn signature_is_128_hex_chars() {
        let signature = sign(SECRET, BODY);

        assert_eq!(signature.len(), 128);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn matches_known_vector() {
        // RFC 4231 test case 2.
        let signature = sign(b"Jefe", b"what do ya want for nothing?");

        assert_eq!(
            signature,
            "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554\
             9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
        );
    }

    #[test]
    fn accepts_correct_signature() {
        let signature = sign(SECRET, BODY);

        assert!(verify(SECRET, BODY, &signature));
    }

    #[test]
    fn accepts_uppercase_hex() {
        let signature = sign(SECRET, BODY).to_uppercase();

        assert!(verify(SECRET, BODY, &signature));
    }

    #[test]
    fn rejects_a_single_flipped_byte_in_the_body() {
        let signature = sign(SECRET, BODY);

        let mut tampered = BODY.to_vec();

        if let Some(byte) = tampered.get_mut(10) {
            *byte ^= 0x01;
        }

        assert!(!verify(SECRET, &tampered, &signature));
    }

    #[test]
    fn rejects_a_single_flipped_signature_digit() {
        let mut signature = sign(SECRET, BODY).into_bytes();

        if let Some(digit) = signature.first_mut() {
            *digit = if *digit == b'0' { b'1' } else { b'0' };
        }

        let signature = String::from_utf8(signature).unwrap_or_default();

        assert!(!verify(SECRET, BODY, &signature));
    }

    #[test]
    fn rejects_wrong_secret() {
        let signature = sign(b"another_secret", BODY);

        assert!(!verify(SECRET, BODY, &signature));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(!verify(SECRET, BODY, "not-hex"));
        assert!(!verify(SECRET, BODY, ""));
        assert!(!verify(SECRET, BODY, "abc"));
    }

    #[test]
    fn rejects_truncated_signature() {
        let signature = sign(SECRET, BODY);

        assert!(!verify(SECRET, BODY, signature.get(..64).unwrap_or_default()));
    }
}
