use std::sync::Arc;

use serde_json::json;
use silos::{Activity, BrowserEndpoint, Registry, SiloOptions};
use tracing_subscriber::{prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    println!("starting silo_urls");
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new("debug"))
                .expect("telemetry: Creating EnvFilter"),
        )
        .init();

    let registry = match Registry::with_defaults(
        &SiloOptions::default(),
        Arc::new(fake_resolver::FakeResolver::new("snarfed")),
    ) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!("failed to build registry: {}", err);
            return;
        }
    };

    for (name, url) in registry.profile_urls().await {
        match url {
            Ok(url) => println!("{}: profile {}", name, url),
            Err(err) => tracing::error!(silo = name, "profile url: {}", err),
        }
    }

    let activities = [
        Activity::from(json!({
            "fb_id": "12345",
            "object": {"fb_reaction_count": 7, "tags": [{"verb": "like"}]},
        })),
        Activity::from(json!({
            "object": {"ig_like_count": 3, "ig_shortcode": "BDJ7Nr"},
        })),
        Activity::from(json!({"object": {}})),
    ];

    for silo in registry.iter() {
        match silo.feed_url().await {
            Ok(url) => println!("{}: feed {}", silo.name(), url),
            Err(err) => tracing::error!(silo = silo.name(), "feed url: {}", err),
        }
        println!(
            "{}: login {} (cookie '{}'), likes relay {}",
            silo.name(),
            silo.login_url_path(),
            silo.session_cookie_name(),
            silo.browser_path(BrowserEndpoint::Likes)
        );
        for activity in &activities {
            let count = silo
                .reactions_count(activity)
                .map_or_else(|| "unknown".to_string(), |count| count.to_string());
            if !silo.needs_reactions_fetch(activity) {
                println!("{}: {} reactions, all known", silo.name(), count);
                continue;
            }
            match silo.reactions_url(activity) {
                Ok(url) => println!("{}: {} reactions at {}", silo.name(), count, url),
                Err(err) => tracing::warn!(silo = silo.name(), "skipping activity: {}", err),
            }
        }
    }
}

pub mod fake_resolver {
    use async_trait::async_trait;
    use silos::UsernameResolver;

    #[derive(Debug)]
    pub struct FakeResolver {
        username: String,
    }

    impl FakeResolver {
        pub fn new(username: &str) -> Self {
            Self {
                username: username.to_string(),
            }
        }
    }

    #[async_trait]
    impl UsernameResolver for FakeResolver {
        async fn username(&self) -> Option<String> {
            tracing::debug!("pretending to scrape the home page");
            tokio::task::yield_now().await;
            Some(self.username.clone())
        }
    }
}
