//! Client IP derivation from proxy headers.

use axum::http::HeaderMap;

/// Derives the client IP from request headers.
///
/// Takes the first entry of a comma-separated `x-forwarded-for` chain
/// (trimmed), falling back to the platform's `cf-connecting-ip` header.
/// Returns `None` when neither is present; the peer socket address is
/// deliberately not consulted, since behind any proxy it would only name the
/// proxy.
pub fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    headers
        .get("cf-connecting-ip")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
}
