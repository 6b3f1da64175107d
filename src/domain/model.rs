use serde::{Deserialize, Serialize};

/// Site owner shown in the header of every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub email: String,
    pub git: String,
    pub image: String,
}

/// One position in the career history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEntry {
    pub title: String,
    pub time: String,
    pub duration: String,
    pub image: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
    #[serde(default)]
    pub etcs: Vec<String>,
}

/// A project highlight inside a career entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub project: String,
    pub role: String,
    pub problem: String,
    pub solve: String,
    pub effect: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub time: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

/// One showcased project. `body_html` is author-supplied raw HTML and must
/// pass through the sanitizer before it reaches a page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub title: String,
    pub time: String,
    pub duration: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub body_html: String,
    #[serde(default)]
    pub frontend: Vec<String>,
    #[serde(default)]
    pub deployment: Vec<String>,
}

/// Immutable content store: constructed once at collect time, only read after.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteContent {
    pub title: String,
    pub image_root: String,
    pub profile: Profile,
    #[serde(default)]
    pub introduce: Vec<String>,
    #[serde(default)]
    pub careers: Vec<CareerEntry>,
    #[serde(default)]
    pub educations: Vec<EducationEntry>,
    #[serde(default)]
    pub portfolios: Vec<PortfolioEntry>,
}

/// A fully rendered document, written at `path` relative to the output
/// directory.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub path: String,
    pub html: String,
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub pages: Vec<RenderedPage>,
    pub manifest_json: String,
}
