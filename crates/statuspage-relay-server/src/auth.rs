//! Inbound webhook authentication (HMAC-SHA256)
//!
//! Statuspage signs the raw request body with the shared secret and sends
//! `sha256=<lowercase hex>` in `X-Webhook-Signature`.

use axum::http::HeaderMap;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use statuspage_relay::DomainError;

type HmacSha256 = Hmac<Sha256>;

/// `X-Webhook-Signature`; header names are case-insensitive
pub const SIGNATURE_HEADER: &str = "x-webhook-signature";
const SIGNATURE_PREFIX: &str = "sha256=";

/// Check a request against the configured secret.
///
/// With no secret configured every request is trusted, whatever its
/// signature header says.
pub fn verify_request(
    secret: Option<&str>,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), DomainError> {
    let Some(secret) = secret else {
        return Ok(());
    };

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    if verify_signature(secret, body, signature) {
        Ok(())
    } else {
        tracing::warn!(
            header_present = headers.contains_key(SIGNATURE_HEADER),
            "Invalid webhook signature"
        );
        Err(DomainError::Auth)
    }
}

/// Constant-time comparison of `signature` with the HMAC of `body`
pub fn verify_signature(secret: &str, body: &[u8], signature: &str) -> bool {
    let Some(hex_digest) = signature.strip_prefix(SIGNATURE_PREFIX) else {
        return false;
    };
    // The expected form is lowercase hex; hex::decode alone would also
    // accept uppercase digits.
    if hex_digest.bytes().any(|b| b.is_ascii_uppercase()) {
        return false;
    }
    let Ok(expected) = hex::decode(hex_digest) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}
