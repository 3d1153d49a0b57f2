//! Analytics tracking-ID guard
//!
//! The tracking ID ends up inside a script tag, so anything that is not a
//! plain GA4 measurement ID is dropped.

use regex::Regex;
use std::sync::OnceLock;

fn ga4_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^G-[A-Z0-9]{10}$").expect("static pattern is valid"))
}

/// Return the tracking ID when it is a well-formed GA4 ID (`G-` plus ten
/// upper-case alphanumerics), `None` otherwise
pub fn sanitize_analytics_id(tracking_id: Option<&str>) -> Option<&str> {
    tracking_id.filter(|id| ga4_pattern().is_match(id))
}
