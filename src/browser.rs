//! Endpoints the browser extension posts scraped silo pages to.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserEndpoint {
    /// Home page HTML, answered with the logged in username.
    Homepage,
    /// Profile page HTML, answered with the profile's activities.
    Profile,
    /// A single post's HTML, stored as an activity.
    Post,
    /// Reactions page HTML, merged into a stored activity.
    Likes,
    Poll,
    TokenDomains,
}

impl BrowserEndpoint {
    pub const ALL: [BrowserEndpoint; 6] = [
        BrowserEndpoint::Homepage,
        BrowserEndpoint::Profile,
        BrowserEndpoint::Post,
        BrowserEndpoint::Likes,
        BrowserEndpoint::Poll,
        BrowserEndpoint::TokenDomains,
    ];

    pub fn segment(self) -> &'static str {
        match self {
            BrowserEndpoint::Homepage => "homepage",
            BrowserEndpoint::Profile => "profile",
            BrowserEndpoint::Post => "post",
            BrowserEndpoint::Likes => "likes",
            BrowserEndpoint::Poll => "poll",
            BrowserEndpoint::TokenDomains => "token-domains",
        }
    }
}

impl fmt::Display for BrowserEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

pub fn endpoint_path(silo_name: &str, endpoint: BrowserEndpoint) -> String {
    format!("/{}/browser/{}", silo_name, endpoint.segment())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_prefixed_with_silo_name() {
        assert_eq!(
            endpoint_path("facebook", BrowserEndpoint::Likes),
            "/facebook/browser/likes"
        );
        assert_eq!(
            endpoint_path("instagram", BrowserEndpoint::TokenDomains),
            "/instagram/browser/token-domains"
        );
    }

    #[test]
    fn every_endpoint_has_a_distinct_segment() {
        let mut segments: Vec<_> = BrowserEndpoint::ALL.iter().map(|e| e.segment()).collect();
        segments.sort_unstable();
        segments.dedup();
        assert_eq!(segments.len(), BrowserEndpoint::ALL.len());
    }
}
