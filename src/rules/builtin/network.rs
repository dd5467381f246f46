//! E-mail, URL and IP address rules.

use crate::core::types::Value;
use crate::rules::registry::RuleRegistry;
use lazy_static::lazy_static;
use regex::Regex;
use std::net::IpAddr;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$"
    )
    .expect("email pattern is valid");
    static ref URL: Regex =
        Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s/?#]+[^\s]*$").expect("url pattern is valid");
}

/// Register network rules.
pub fn register(registry: &mut RuleRegistry) {
    registry.register("valid_email", "An e-mail address", valid_email);
    registry.register(
        "valid_emails",
        "A comma-separated list of e-mail addresses",
        valid_emails,
    );
    registry.register("valid_url", "An absolute URL", valid_url);
    registry.register("valid_ip", "An IPv4 or IPv6 address", valid_ip);
}

/// A single e-mail address.
pub fn valid_email(value: &Value, _: Option<&str>) -> bool {
    value.as_str().is_some_and(|s| EMAIL.is_match(s))
}

/// One or more e-mail addresses separated by commas.
pub fn valid_emails(value: &Value, _: Option<&str>) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.split(',').all(|part| EMAIL.is_match(part.trim())))
}

/// An absolute URL with a scheme and a host.
pub fn valid_url(value: &Value, _: Option<&str>) -> bool {
    value.as_str().is_some_and(|s| URL.is_match(s))
}

/// An IPv4 or IPv6 address.
pub fn valid_ip(value: &Value, _: Option<&str>) -> bool {
    value
        .as_str()
        .is_some_and(|s| s.trim().parse::<IpAddr>().is_ok())
}
