#[cfg(feature = "cli")]
pub mod cli;
pub mod site;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "folio-gen")]
#[command(about = "Static portfolio site generator")]
pub struct CliConfig {
    #[arg(long = "content", default_value = "./content/site.toml")]
    pub content_path: String,

    #[arg(long = "output", default_value = "./dist")]
    pub output_path: String,

    #[arg(long, help = "Bundle the published site into a ZIP archive")]
    pub archive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process memory and timing stats")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn content_path(&self) -> &str {
        &self.content_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn archive(&self) -> bool {
        self.archive
    }
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_path("content", &self.content_path)?;
        crate::utils::validation::validate_path("output", &self.output_path)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["folio-gen"]);
        assert_eq!(config.content_path, "./content/site.toml");
        assert_eq!(config.output_path, "./dist");
        assert!(!config.archive);
        assert!(!config.verbose);
    }

    #[test]
    fn test_content_and_output_flags() {
        let config = CliConfig::parse_from([
            "folio-gen",
            "--content",
            "data/site.toml",
            "--output",
            "public",
            "--archive",
        ]);
        assert_eq!(config.content_path, "data/site.toml");
        assert_eq!(config.output_path, "public");
        assert!(config.archive);
    }
}
