use async_trait::async_trait;
use url::form_urlencoded;

use super::SiloOptions;
use crate::{
    activity::Activity,
    error::{Result, SiloError},
    Silo,
};

const NAME: &str = "facebook";
const DOMAIN: &str = "facebook.com";
const BASE_URL: &str = "https://mbasic.facebook.com";
const LOGIN_URL_PATH: &str = "/login.php";
const SESSION_COOKIE: &str = "c_user";

const PROFILE_PATH: &str = "/profile.php?v=info";
const FEED_PATH: &str = "/me";
const REACTIONS_PATH: &str = "/ufi/reaction/profile/browser/?ft_ent_identifier=";

const REACTION_COUNT_FIELD: [&str; 2] = ["object", "fb_reaction_count"];
const ID_FIELD: &str = "fb_id";

#[derive(Debug, Clone)]
pub struct Facebook {
    base_url: String,
}

impl Facebook {
    pub fn new() -> Self {
        Self::with_options(&SiloOptions::default())
    }

    pub fn with_options(options: &SiloOptions) -> Self {
        Self {
            base_url: options.base_url_or(BASE_URL),
        }
    }
}

impl Default for Facebook {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Silo for Facebook {
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
        Ok(PROFILE_PATH.to_string())
    }

    async fn feed_path(&self) -> Result<String> {
        Ok(FEED_PATH.to_string())
    }

    fn reactions_count(&self, activity: &Activity) -> Option<u64> {
        activity.u64_at(&REACTION_COUNT_FIELD)
    }

    fn reactions_path(&self, activity: &Activity) -> Result<String> {
        let Some(id) = activity.id_at(&[ID_FIELD]) else {
            tracing::warn!("{}: no '{}' on activity, can't build reactions path", NAME, ID_FIELD);
            return Err(SiloError::MissingIdentifier {
                silo: NAME,
                field: ID_FIELD,
            });
        };
        let id: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
        tracing::debug!(id, "{}: reactions path", NAME);
        Ok(format!("{}{}", REACTIONS_PATH, id))
    }
}
