//! Per-site adapters, implementing the trait `Silo`, that tell a scraping
//! framework where a social network keeps its pages.

mod activity;
pub mod browser;
mod error;
pub mod registry;
mod silo;
pub mod silos;

pub use activity::Activity;
pub use browser::BrowserEndpoint;
pub use error::{Result, SiloError};
pub use registry::{Registry, SiloKind};
pub use silo::Silo;
pub use silos::{Facebook, Instagram, SiloOptions, StaticUsername, UsernameResolver};
