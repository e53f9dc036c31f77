use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

use futures::future::join_all;
use url::Url;

use crate::{
    error::{Result, SiloError},
    silos::{Facebook, Instagram, SiloOptions, UsernameResolver},
    Silo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiloKind {
    Facebook,
    Instagram,
}

impl SiloKind {
    pub const ALL: [SiloKind; 2] = [SiloKind::Facebook, SiloKind::Instagram];

    pub fn name(self) -> &'static str {
        match self {
            SiloKind::Facebook => "facebook",
            SiloKind::Instagram => "instagram",
        }
    }

    pub fn domain(self) -> &'static str {
        match self {
            SiloKind::Facebook => "facebook.com",
            SiloKind::Instagram => "instagram.com",
        }
    }

    pub fn build(
        self,
        options: &SiloOptions,
        resolver: Arc<dyn UsernameResolver>,
    ) -> Arc<dyn Silo> {
        match self {
            SiloKind::Facebook => Arc::new(Facebook::with_options(options)),
            SiloKind::Instagram => Arc::new(Instagram::with_options(resolver, options)),
        }
    }
}

impl fmt::Display for SiloKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SiloKind {
    type Err = SiloError;

    fn from_str(s: &str) -> Result<Self> {
        SiloKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| SiloError::UnknownSilo(s.to_string()))
    }
}

/// Silos the framework can drive, looked up by name or by domain.
#[derive(Default)]
pub struct Registry {
    silos: Vec<Arc<dyn Silo>>,
    by_name: HashMap<String, usize>,
    by_domain: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding one silo of every [`SiloKind`].
    pub fn with_defaults(
        options: &SiloOptions,
        resolver: Arc<dyn UsernameResolver>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for kind in SiloKind::ALL {
            registry.register(kind.build(options, resolver.clone()))?;
        }
        Ok(registry)
    }

    pub fn register(&mut self, silo: Arc<dyn Silo>) -> Result<()> {
        let name = silo.name().to_ascii_lowercase();
        let domain = silo.domain().to_ascii_lowercase();
        if self.by_name.contains_key(&name) {
            return Err(SiloError::DuplicateSilo(name));
        }
        if self.by_domain.contains_key(&domain) {
            return Err(SiloError::DuplicateSilo(domain));
        }
        tracing::debug!(name, domain, "registering silo");
        let index = self.silos.len();
        self.silos.push(silo);
        self.by_name.insert(name, index);
        self.by_domain.insert(domain, index);
        Ok(())
    }

    pub fn by_name(&self, name: &str) -> Result<Arc<dyn Silo>> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&index| self.silos[index].clone())
            .ok_or_else(|| SiloError::UnknownSilo(name.to_string()))
    }

    pub fn by_kind(&self, kind: SiloKind) -> Result<Arc<dyn Silo>> {
        self.by_name(kind.name())
    }

    /// Exact domain or any subdomain of a registered domain.
    pub fn by_domain(&self, host: &str) -> Option<Arc<dyn Silo>> {
        let host = host.trim_end_matches('.').to_ascii_lowercase();
        let mut candidate = host.as_str();
        loop {
            if let Some(&index) = self.by_domain.get(candidate) {
                tracing::debug!(host, domain = candidate, "matched silo");
                return Some(self.silos[index].clone());
            }
            match candidate.split_once('.') {
                Some((_, parent)) => candidate = parent,
                None => return None,
            }
        }
    }

    pub fn for_url(&self, url: &Url) -> Option<Arc<dyn Silo>> {
        self.by_domain(url.host_str()?)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Silo>> {
        self.silos.iter()
    }

    pub fn len(&self) -> usize {
        self.silos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.silos.is_empty()
    }

    /// Resolves every silo's profile URL concurrently, in registration order.
    pub async fn profile_urls(&self) -> Vec<(String, Result<Url>)> {
        join_all(self.silos.iter().map(|silo| async move {
            (silo.name().to_string(), silo.profile_url().await)
        }))
        .await
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.silos.iter().map(|silo| silo.name()))
            .finish()
    }
}
