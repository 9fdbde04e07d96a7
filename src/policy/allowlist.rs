//! Hostname Allowlist
//!
//! Decides whether a target URL may be proxied upstream.

use std::collections::HashSet;

use url::Url;

use crate::error::{ProxyError, Result};

pub const INVALID_URL_MESSAGE: &str = "Invalid URL";
pub const DOMAIN_NOT_ALLOWED_MESSAGE: &str = "Domain not allowed";

// == Allowlist ==
/// Hostname policy applied to target URLs.
///
/// `Disabled` lets every URL through without parsing it. `Hosts` holds
/// lowercase hostnames; a target matches when its hostname, minus one
/// leading `www.`, is in the set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Allowlist {
    #[default]
    Disabled,
    Hosts(HashSet<String>),
}

impl Allowlist {
    // == Constructors ==
    /// Builds an enabled allowlist from hostnames.
    ///
    /// Blank entries are ignored. An empty result still counts as enabled
    /// and rejects every host.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Allowlist::Hosts(
            hosts
                .into_iter()
                .map(|h| h.as_ref().trim().to_ascii_lowercase())
                .filter(|h| !h.is_empty())
                .collect(),
        )
    }

    /// Parses a comma-separated host list. Blank input disables the policy.
    pub fn from_csv(value: &str) -> Self {
        if value.trim().is_empty() {
            return Allowlist::Disabled;
        }
        Self::new(value.split(','))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Allowlist::Hosts(_))
    }

    // == Check ==
    /// Validates `target` against the policy.
    ///
    /// # Errors
    /// - `BadRequest("Invalid URL")` if the policy is enabled and `target` does not parse
    /// - `Forbidden("Domain not allowed")` if the hostname is not in the set
    pub fn check(&self, target: &str) -> Result<()> {
        let hosts = match self {
            Allowlist::Disabled => return Ok(()),
            Allowlist::Hosts(hosts) => hosts,
        };

        let parsed =
            Url::parse(target).map_err(|_| ProxyError::BadRequest(INVALID_URL_MESSAGE.into()))?;

        // URLs without a host (mailto:, data:) have an empty hostname
        let host = parsed.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);

        if hosts.contains(host) {
            Ok(())
        } else {
            Err(ProxyError::Forbidden(DOMAIN_NOT_ALLOWED_MESSAGE.into()))
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn youtube_only() -> Allowlist {
        Allowlist::new(["youtube.com", "example.com"])
    }

    #[test]
    fn test_disabled_allows_anything() {
        let allowlist = Allowlist::Disabled;
        assert!(allowlist.check("https://anything.example.org").is_ok());
        assert!(allowlist.check("not even a url").is_ok());
    }

    #[test]
    fn test_allowed_host() {
        assert!(youtube_only().check("https://youtube.com/watch?v=1").is_ok());
    }

    #[test]
    fn test_www_prefix_is_stripped() {
        assert!(youtube_only().check("https://www.youtube.com").is_ok());
    }

    #[test]
    fn test_only_one_www_prefix_is_stripped() {
        let result = youtube_only().check("https://www.www.youtube.com");
        assert!(matches!(result, Err(ProxyError::Forbidden(_))));
    }

    #[test]
    fn test_subdomain_is_not_allowed() {
        let result = youtube_only().check("https://m.youtube.com");
        assert!(matches!(result, Err(ProxyError::Forbidden(_))));
    }

    #[test]
    fn test_host_comparison_ignores_case() {
        let allowlist = Allowlist::new(["YouTube.com"]);
        assert!(allowlist.check("https://WWW.YOUTUBE.COM/").is_ok());
    }

    #[test]
    fn test_unparsable_url_is_bad_request() {
        let result = youtube_only().check("youtube.com");
        match result {
            Err(ProxyError::BadRequest(msg)) => assert_eq!(msg, "Invalid URL"),
            other => panic!("expected BadRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_url_without_host_is_forbidden() {
        let result = youtube_only().check("mailto:someone@youtube.com");
        assert!(matches!(result, Err(ProxyError::Forbidden(_))));
    }

    #[test]
    fn test_from_csv() {
        assert_eq!(Allowlist::from_csv(""), Allowlist::Disabled);
        assert_eq!(Allowlist::from_csv("  "), Allowlist::Disabled);

        let allowlist = Allowlist::from_csv("youtube.com, ,example.com");
        assert_eq!(allowlist, youtube_only());
    }

    #[test]
    fn test_empty_enabled_list_rejects_everything() {
        let allowlist = Allowlist::new(Vec::<String>::new());
        assert!(allowlist.is_enabled());
        assert!(allowlist.check("https://example.com").is_err());
    }
}
