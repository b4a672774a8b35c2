use std::env;

use poem::session::{CookieConfig, CookieSession};

/// Initialize the cookie-backed session layer the cart lives in.
///
/// Environment variables:
/// - SESSION_COOKIE_NAME: Name of the session cookie (default: "storefront_session")
/// - SESSION_COOKIE_SECURE: Set to "true" to mark the cookie Secure
///   (default: "false", suitable for local development over plain HTTP)
///
/// Sessions are client-side: the cart's id list is serialized into the
/// cookie itself, so no server-side session store is needed.
pub fn init_session() -> CookieSession {
    let cookie_name =
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "storefront_session".to_string());
    let secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v == "true")
        .unwrap_or(false);

    CookieSession::new(CookieConfig::default().name(cookie_name).secure(secure))
}
