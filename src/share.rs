//! Share Targets
//!
//! Maps a social platform to its share-intent URL for the current page.
//! Pure string construction; opening the URL is the caller's side effect.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Percent-encoding matching `encodeURIComponent`, which the share
/// endpoints expect for their `url` query parameter
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The supported share platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    Facebook,
    Reddit,
    Pinterest,
    Linkedin,
}

/// Selection of a platform outside the supported set; informational, the
/// share menu surfaces it and moves on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedPlatform(pub String);

impl fmt::Display for UnsupportedPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sharing to \"{}\" is not supported", self.0)
    }
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 5] = [
        ShareTarget::Twitter,
        ShareTarget::Facebook,
        ShareTarget::Reddit,
        ShareTarget::Pinterest,
        ShareTarget::Linkedin,
    ];

    /// Stable identifier used as the menu item key
    pub fn name(self) -> &'static str {
        match self {
            ShareTarget::Twitter => "twitter",
            ShareTarget::Facebook => "facebook",
            ShareTarget::Reddit => "reddit",
            ShareTarget::Pinterest => "pinterest",
            ShareTarget::Linkedin => "linkedin",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::Facebook => "Facebook",
            ShareTarget::Reddit => "Reddit",
            ShareTarget::Pinterest => "Pinterest",
            ShareTarget::Linkedin => "LinkedIn",
        }
    }

    pub fn from_name(name: &str) -> Result<ShareTarget, UnsupportedPlatform> {
        ShareTarget::ALL
            .into_iter()
            .find(|target| target.name() == name)
            .ok_or_else(|| UnsupportedPlatform(name.to_string()))
    }

    /// Share-intent URL for this platform, parameterized by the page URL
    pub fn intent_url(self, page_url: &str) -> String {
        let encoded = utf8_percent_encode(page_url, URL_COMPONENT);
        match self {
            ShareTarget::Twitter => {
                format!("https://twitter.com/intent/tweet?url={}", encoded)
            }
            ShareTarget::Facebook => {
                format!("https://www.facebook.com/sharer/sharer.php?u={}", encoded)
            }
            ShareTarget::Reddit => {
                format!("https://www.reddit.com/submit?url={}", encoded)
            }
            ShareTarget::Pinterest => {
                format!("https://www.pinterest.com/pin/create/button/?url={}", encoded)
            }
            ShareTarget::Linkedin => {
                format!("https://www.linkedin.com/sharing/share-offsite/?url={}", encoded)
            }
        }
    }
}

/// Resolve a platform name against the current page URL
pub fn share_url(platform: &str, page_url: &str) -> Result<String, UnsupportedPlatform> {
    ShareTarget::from_name(platform).map(|target| target.intent_url(page_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_target_resolves_by_name() {
        for target in ShareTarget::ALL {
            assert_eq!(ShareTarget::from_name(target.name()), Ok(target));
        }
    }

    #[test]
    fn unknown_platform_is_rejected_not_resolved() {
        let err = share_url("myspace", "https://example.com").unwrap_err();
        assert_eq!(err, UnsupportedPlatform("myspace".to_string()));
        assert_eq!(err.to_string(), "Sharing to \"myspace\" is not supported");
    }

    #[test]
    fn reddit_intent_url_encodes_the_page_url() {
        let url = share_url("reddit", "https://example.com/devops").unwrap();
        assert_eq!(
            url,
            "https://www.reddit.com/submit?url=https%3A%2F%2Fexample.com%2Fdevops"
        );
    }

    #[test]
    fn encoding_keeps_unreserved_marks_literal() {
        let url = ShareTarget::Twitter.intent_url("https://example.com/a_b-c.d~e");
        assert_eq!(
            url,
            "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fa_b-c.d~e"
        );
    }

    #[test]
    fn intent_urls_use_the_fixed_domain_table() {
        let hosts = [
            ("twitter", "https://twitter.com/"),
            ("facebook", "https://www.facebook.com/"),
            ("reddit", "https://www.reddit.com/"),
            ("pinterest", "https://www.pinterest.com/"),
            ("linkedin", "https://www.linkedin.com/"),
        ];
        for (name, prefix) in hosts {
            let url = share_url(name, "https://example.com").unwrap();
            assert!(url.starts_with(prefix), "{} -> {}", name, url);
        }
    }
}
