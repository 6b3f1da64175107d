//! Content configuration: the TOML file that defines everything the site
//! renders. Parsed once into an immutable [`SiteContent`] store.

use crate::domain::model::{CareerEntry, EducationEntry, PortfolioEntry, Profile, SiteContent};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub profile: Profile,
    #[serde(default)]
    pub introduce: Vec<String>,
    #[serde(default, rename = "career")]
    pub careers: Vec<CareerEntry>,
    #[serde(default, rename = "education")]
    pub educations: Vec<EducationEntry>,
    #[serde(default, rename = "portfolio")]
    pub portfolios: Vec<PortfolioEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub title: String,
    pub description: Option<String>,
    pub image_root: Option<String>,
}

impl SiteConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SiteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SiteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` placeholders from the environment; unset variables
    /// are left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("site.title", &self.site.title)?;
        validation::validate_non_empty_string("profile.name", &self.profile.name)?;
        validation::validate_url("profile.git", &self.profile.git)?;

        let mut images = vec![self.profile.image.clone()];
        images.extend(self.careers.iter().map(|c| c.image.clone()));
        images.extend(self.portfolios.iter().flat_map(|p| p.images.clone()));
        validation::validate_file_extensions("images", &images, IMAGE_EXTENSIONS)?;

        Ok(())
    }

    /// Freeze the parsed configuration into the content store the renderer
    /// reads.
    pub fn into_content(self) -> SiteContent {
        SiteContent {
            title: self.site.title,
            image_root: self
                .site
                .image_root
                .unwrap_or_else(|| "/static/images".to_string()),
            profile: self.profile,
            introduce: self.introduce,
            careers: self.careers,
            educations: self.educations,
            portfolios: self.portfolios,
        }
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
