mod facebook;
mod instagram;

pub use facebook::Facebook;
pub use instagram::{Instagram, StaticUsername, UsernameResolver};

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct SiloOptions {
    /// Replaces the silo's own origin, e.g. to point at a local mock server.
    pub base_url: Option<String>,
}

impl SiloOptions {
    pub(crate) fn base_url_or(&self, default: &str) -> String {
        self.base_url
            .as_deref()
            .unwrap_or(default)
            .trim_end_matches('/')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let options = SiloOptions {
            base_url: Some("http://localhost:8080/".into()),
        };
        assert_eq!(options.base_url_or("https://x.com"), "http://localhost:8080");
        assert_eq!(SiloOptions::default().base_url_or("https://x.com"), "https://x.com");
    }

    #[test]
    fn options_deserialize_with_missing_fields() {
        let options: SiloOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, SiloOptions::default());
        let options: SiloOptions =
            serde_json::from_str(r#"{"base_url": "http://127.0.0.1:9000"}"#).unwrap();
        assert_eq!(options.base_url.as_deref(), Some("http://127.0.0.1:9000"));
    }
}
