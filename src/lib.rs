pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::site::SiteConfig;
pub use core::{engine::SiteEngine, pipeline::SitePipeline};
pub use render::{SafeHtml, Sanitizer};
pub use utils::error::{Result, SiteError};
