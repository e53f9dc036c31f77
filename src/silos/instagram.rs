use std::sync::Arc;

use async_trait::async_trait;

use super::SiloOptions;
use crate::{
    activity::Activity,
    error::{Result, SiloError},
    Silo,
};

const NAME: &str = "instagram";
const DOMAIN: &str = "instagram.com";
const BASE_URL: &str = "https://www.instagram.com";
const LOGIN_URL_PATH: &str = "/accounts/login/";
const SESSION_COOKIE: &str = "sessionid";

const REACTION_COUNT_FIELD: [&str; 2] = ["object", "ig_like_count"];
const SHORTCODE_FIELD: [&str; 2] = ["object", "ig_shortcode"];

/// Finds out who is logged in, typically by scraping the home page.
#[async_trait]
pub trait UsernameResolver: Send + Sync {
    async fn username(&self) -> Option<String>;
}

/// Resolver for a username that is already known.
#[derive(Debug, Clone)]
pub struct StaticUsername(pub String);

#[async_trait]
impl UsernameResolver for StaticUsername {
    async fn username(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

pub struct Instagram {
    base_url: String,
    resolver: Arc<dyn UsernameResolver>,
}

impl Instagram {
    pub fn new(resolver: Arc<dyn UsernameResolver>) -> Self {
        Self::with_options(resolver, &SiloOptions::default())
    }

    pub fn with_options(resolver: Arc<dyn UsernameResolver>, options: &SiloOptions) -> Self {
        Self {
            base_url: options.base_url_or(BASE_URL),
            resolver,
        }
    }

    async fn user_path(&self) -> Result<String> {
        let username = self.resolver.username().await;
        match username.as_deref().and_then(path_segment) {
            Some(segment) => {
                tracing::debug!(username = segment, "{}: resolved user", NAME);
                Ok(format!("/{}/", segment))
            }
            _ => {
                tracing::warn!("{}: couldn't determine logged in user", NAME);
                Err(SiloError::UnknownUser { silo: NAME })
            }
        }
    }
}

/// Percent-encodes `value` as one path segment. Empty and dot segments are
/// rejected since URL parsing would collapse them.
fn path_segment(value: &str) -> Option<String> {
    match value {
        "" | "." | ".." => None,
        _ => Some(urlencoding::encode(value).into_owned()),
    }
}

impl std::fmt::Debug for Instagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Instagram")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Silo for Instagram {
    fn name(&self) -> &str {
        NAME
    }
    fn domain(&self) -> &str {
        DOMAIN
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
    fn login_url_path(&self) -> &str {
        LOGIN_URL_PATH
    }
    fn session_cookie_name(&self) -> &str {
        SESSION_COOKIE
    }

    async fn profile_path(&self) -> Result<String> {
        self.user_path().await
    }

    // Posts are listed on the profile page.
    async fn feed_path(&self) -> Result<String> {
        self.user_path().await
    }

    fn reactions_count(&self, activity: &Activity) -> Option<u64> {
        activity.u64_at(&REACTION_COUNT_FIELD)
    }

    fn reactions_path(&self, activity: &Activity) -> Result<String> {
        match activity.id_at(&SHORTCODE_FIELD).as_deref().and_then(path_segment) {
            Some(shortcode) => Ok(format!("/p/{}/liked_by/", shortcode)),
            None => {
                tracing::warn!("{}: no shortcode on activity", NAME);
                Err(SiloError::MissingIdentifier {
                    silo: NAME,
                    field: "ig_shortcode",
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NobodyLoggedIn;

    #[async_trait]
    impl UsernameResolver for NobodyLoggedIn {
        async fn username(&self) -> Option<String> {
            None
        }
    }

    fn logged_in_as(username: &str) -> Instagram {
        Instagram::new(Arc::new(StaticUsername(username.to_string())))
    }

    #[tokio::test]
    async fn profile_and_feed_use_resolved_username() {
        let instagram = logged_in_as("snarfed");
        assert_eq!(instagram.profile_path().await.unwrap(), "/snarfed/");
        assert_eq!(instagram.feed_path().await.unwrap(), "/snarfed/");
        assert_eq!(
            instagram.profile_url().await.unwrap().as_str(),
            "https://www.instagram.com/snarfed/"
        );
    }

    #[tokio::test]
    async fn unresolved_username_is_an_error() {
        let instagram = Instagram::new(Arc::new(NobodyLoggedIn));
        assert_eq!(
            instagram.profile_path().await,
            Err(SiloError::UnknownUser { silo: "instagram" })
        );
        assert!(instagram.feed_url().await.is_err());

        let instagram = logged_in_as("");
        assert!(instagram.profile_path().await.is_err());
    }

    #[test]
    fn reactions_from_like_count_and_shortcode() {
        let instagram = logged_in_as("snarfed");
        let activity = Activity::from(json!({
            "object": {"ig_like_count": 12, "ig_shortcode": "BDJ7Nr"}
        }));
        assert_eq!(instagram.reactions_count(&activity), Some(12));
        assert_eq!(
            instagram.reactions_path(&activity).unwrap(),
            "/p/BDJ7Nr/liked_by/"
        );
        assert_eq!(instagram.reactions_count(&Activity::from(json!({}))), None);
        assert_eq!(
            instagram.reactions_path(&Activity::from(json!({"object": {}}))),
            Err(SiloError::MissingIdentifier {
                silo: "instagram",
                field: "ig_shortcode",
            })
        );
    }

    #[tokio::test]
    async fn username_is_escaped_as_one_segment() {
        let instagram = logged_in_as("a b/c");
        assert_eq!(instagram.profile_path().await.unwrap(), "/a%20b%2Fc/");
        assert_eq!(
            instagram.profile_url().await.unwrap().as_str(),
            "https://www.instagram.com/a%20b%2Fc/"
        );
    }

    #[tokio::test]
    async fn dot_usernames_are_rejected() {
        for username in [".", ".."] {
            let instagram = logged_in_as(username);
            assert_eq!(
                instagram.profile_path().await,
                Err(SiloError::UnknownUser { silo: "instagram" })
            );
            assert!(instagram.profile_url().await.is_err());
        }
    }

    #[test]
    fn shortcode_is_escaped_as_one_segment() {
        let instagram = logged_in_as("snarfed");
        let activity = Activity::from(json!({"object": {"ig_shortcode": "x/y"}}));
        assert_eq!(
            instagram.reactions_path(&activity).unwrap(),
            "/p/x%2Fy/liked_by/"
        );
        for shortcode in [".", ".."] {
            let activity = Activity::from(json!({"object": {"ig_shortcode": shortcode}}));
            assert_eq!(
                instagram.reactions_path(&activity),
                Err(SiloError::MissingIdentifier {
                    silo: "instagram",
                    field: "ig_shortcode",
                })
            );
        }
    }

    #[test]
    fn login_url_and_cookie() {
        let instagram = logged_in_as("snarfed");
        assert_eq!(instagram.session_cookie_name(), "sessionid");
        assert_eq!(
            instagram.login_url().unwrap().as_str(),
            "https://www.instagram.com/accounts/login/"
        );
    }
}
