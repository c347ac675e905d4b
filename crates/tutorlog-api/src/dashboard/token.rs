// Dashboard session token
//
// token = hex(HMAC-SHA256(key = fixed application constant, message = secret))
// Not stored server-side: validity is re-derived and compared on every
// request. No expiry beyond the browser cookie's own lifetime.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Keys the token MAC. Rotating this constant invalidates every outstanding
/// cookie without touching the shared secret.
const TOKEN_MAC_KEY: &[u8] = b"tutorlog-dashboard-token-v1";

/// Cookie carrying the derived token.
pub const TOKEN_COOKIE: &str = "dash_token";

/// Derive the bearer token from the shared secret.
pub fn derive_token(secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(TOKEN_MAC_KEY).expect("HMAC can take key of any size");
    mac.update(secret.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Constant-time equality for passwords and tokens; never short-circuits on
/// the first differing byte.
pub fn secrets_match(expected: &str, presented: &str) -> bool {
    expected.as_bytes().ct_eq(presented.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_is_deterministic() {
        assert_eq!(derive_token("hunter2"), derive_token("hunter2"));
    }

    #[test]
    fn test_token_is_hex_sha256_width() {
        let token = derive_token("hunter2");
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_different_secrets_derive_different_tokens() {
        assert_ne!(derive_token("hunter2"), derive_token("hunter3"));
    }

    #[test]
    fn test_correct_token_always_validates() {
        let expected = derive_token("hunter2");
        assert!(secrets_match(&expected, &derive_token("hunter2")));
    }

    #[test]
    fn test_token_from_any_other_string_never_validates() {
        let expected = derive_token("hunter2");
        assert!(!secrets_match(&expected, &derive_token("hunter3")));
        assert!(!secrets_match(&expected, ""));
        assert!(!secrets_match(&expected, "hunter2"));
    }
}
