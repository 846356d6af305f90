use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

const PERMISSIONS_POLICY: HeaderName = HeaderName::from_static("permissions-policy");

const NOSNIFF: &str = "nosniff";
const DENY: &str = "DENY";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";
// The bundled client is served from the same origin and talks to it with fetch.
const CSP_VALUE: &str =
    "default-src 'self'; script-src 'self'; style-src 'self'; connect-src *; frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";
const PERMISSIONS_POLICY_VALUE: &str = "geolocation=(), microphone=(), camera=()";

/// Headers attached to every response. HSTS only goes out in production,
/// where the service sits behind TLS.
pub fn security_headers(include_hsts: bool) -> Vec<(HeaderName, HeaderValue)> {
    let mut headers = vec![
        (header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static(NOSNIFF)),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static(DENY)),
        (header::CONTENT_SECURITY_POLICY, HeaderValue::from_static(CSP_VALUE)),
        (header::REFERRER_POLICY, HeaderValue::from_static(REFERRER_POLICY_VALUE)),
        (PERMISSIONS_POLICY, HeaderValue::from_static(PERMISSIONS_POLICY_VALUE)),
    ];

    if include_hsts {
        headers.push((
            header::STRICT_TRANSPORT_SECURITY,
            HeaderValue::from_static(HSTS_VALUE),
        ));
    }

    headers
}

pub fn apply_security_headers(router: Router, include_hsts: bool) -> Router {
    if include_hsts {
        tracing::info!("Security: HSTS header enabled (production mode)");
    } else {
        tracing::info!("Security: HSTS header disabled (development mode)");
    }

    security_headers(include_hsts)
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::if_not_present(name, value))
        })
}
