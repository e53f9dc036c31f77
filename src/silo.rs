use async_trait::async_trait;
use url::Url;

use crate::{
    activity::Activity,
    browser::{self, BrowserEndpoint},
    error::Result,
};

/// One social network the framework can scrape.
///
/// Paths are relative to [`Silo::base_url`] and start with `/`. The path
/// lookups are async for every silo, including those that answer with
/// constants.
#[async_trait]
pub trait Silo: Send + Sync {
    fn name(&self) -> &str;
    fn domain(&self) -> &str;
    fn base_url(&self) -> &str;
    fn login_url_path(&self) -> &str;
    /// Cookie carrying the logged in session for this site.
    fn session_cookie_name(&self) -> &str;

    async fn profile_path(&self) -> Result<String>;
    async fn feed_path(&self) -> Result<String>;

    /// Reaction count reported by the platform, `None` when unknown.
    fn reactions_count(&self, activity: &Activity) -> Option<u64>;
    /// Fails with `SiloError::MissingIdentifier` when the activity lacks the
    /// platform's identifier.
    fn reactions_path(&self, activity: &Activity) -> Result<String>;

    /// Appends `path` to the base URL, keeping any path the base URL carries.
    fn resolve(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url(), path))?)
    }

    fn login_url(&self) -> Result<Url> {
        self.resolve(self.login_url_path())
    }

    async fn profile_url(&self) -> Result<Url> {
        let path = self.profile_path().await?;
        self.resolve(&path)
    }

    async fn feed_url(&self) -> Result<Url> {
        let path = self.feed_path().await?;
        self.resolve(&path)
    }

    fn reactions_url(&self, activity: &Activity) -> Result<Url> {
        self.resolve(&self.reactions_path(activity)?)
    }

    fn browser_path(&self, endpoint: BrowserEndpoint) -> String {
        browser::endpoint_path(self.name(), endpoint)
    }

    /// Whether `url` points at this silo's domain or one of its subdomains.
    fn owns_url(&self, url: &Url) -> bool {
        url.host_str()
            .is_some_and(|host| host_matches(host, self.domain()))
    }

    /// Reactions already merged into the activity's tags.
    fn known_reactions(&self, activity: &Activity) -> usize {
        activity
            .tags()
            .iter()
            .filter(|tag| {
                matches!(
                    tag.get("verb").and_then(|verb| verb.as_str()),
                    Some("like" | "react")
                )
            })
            .count()
    }

    /// False only when every reaction the platform counts is already known.
    fn needs_reactions_fetch(&self, activity: &Activity) -> bool {
        match self.reactions_count(activity) {
            Some(count) => count > self.known_reactions(activity) as u64,
            None => true,
        }
    }
}

pub(crate) fn host_matches(host: &str, domain: &str) -> bool {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_matches_domain_and_subdomains() {
        assert!(host_matches("facebook.com", "facebook.com"));
        assert!(host_matches("mbasic.facebook.com", "facebook.com"));
        assert!(host_matches("WWW.Facebook.com.", "facebook.com"));
        assert!(!host_matches("notfacebook.com", "facebook.com"));
        assert!(!host_matches("facebook.com.evil.org", "facebook.com"));
    }
}
