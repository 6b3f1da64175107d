use crate::config::site::SiteConfig;
use crate::core::{ConfigProvider, Pipeline, RenderResult, SiteContent, Storage};
use crate::domain::model::{
    CareerEntry, EducationEntry, Highlight, PortfolioEntry, Profile,
};
use crate::render::page::compose_site;
use crate::render::sanitize::Sanitizer;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::Utc;
use std::io::Write;
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};

const ARCHIVE_NAME: &str = "site_bundle.zip";

pub struct SitePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    sanitizer: Sanitizer,
}

impl<S: Storage, C: ConfigProvider> SitePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            sanitizer: Sanitizer::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SitePipeline<S, C> {
    async fn collect(&self) -> Result<SiteContent> {
        let content_path = self.config.content_path();

        if !Path::new(content_path).exists() {
            tracing::warn!(
                "No content file at {}, rendering sample content",
                content_path
            );
            return Ok(sample_content());
        }

        tracing::debug!("Loading content from: {}", content_path);
        let config = SiteConfig::from_file(content_path)?;
        config.validate()?;
        Ok(config.into_content())
    }

    async fn render(&self, content: SiteContent) -> Result<RenderResult> {
        let pages = compose_site(&content, &self.sanitizer);

        let manifest = serde_json::json!({
            "site": content.title,
            "generated": Utc::now().to_rfc3339(),
            "pages": pages.iter().map(|p| p.path.clone()).collect::<Vec<_>>(),
            "counts": {
                "careers": content.careers.len(),
                "educations": content.educations.len(),
                "portfolios": content.portfolios.len(),
            },
        });

        Ok(RenderResult {
            pages,
            manifest_json: serde_json::to_string_pretty(&manifest)?,
        })
    }

    async fn publish(&self, result: RenderResult) -> Result<String> {
        for page in &result.pages {
            tracing::debug!("Writing page: {} ({} bytes)", page.path, page.html.len());
            self.storage
                .write_file(&page.path, page.html.as_bytes())
                .await?;
        }

        self.storage
            .write_file("manifest.json", result.manifest_json.as_bytes())
            .await?;

        if self.config.archive() {
            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

                for page in &result.pages {
                    zip.start_file::<_, ()>(page.path.as_str(), FileOptions::default())?;
                    zip.write_all(page.html.as_bytes())?;
                }

                zip.start_file::<_, ()>("manifest.json", FileOptions::default())?;
                zip.write_all(result.manifest_json.as_bytes())?;

                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            tracing::debug!("Writing site archive ({} bytes)", zip_data.len());
            self.storage.write_file(ARCHIVE_NAME, &zip_data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}

/// Built-in demo content used when no content file exists yet; lets a fresh
/// checkout produce a browsable site.
fn sample_content() -> SiteContent {
    SiteContent {
        title: "Sample Portfolio".to_string(),
        image_root: "/static/images".to_string(),
        profile: Profile {
            name: "Sample Author".to_string(),
            role: "Frontend Engineer".to_string(),
            email: "author@example.com".to_string(),
            git: "https://github.com/sample-author".to_string(),
            image: "profile.jpg".to_string(),
        },
        introduce: vec![
            "Cross-platform frontend engineer at home on web, mobile and desktop.".to_string(),
            "Focused on state management structure and render performance.".to_string(),
        ],
        careers: vec![CareerEntry {
            title: "Acme Studio".to_string(),
            time: "2021 - 2024".to_string(),
            duration: "3 years".to_string(),
            image: "acme.png".to_string(),
            descriptions: vec!["Product team for the consumer mobile app.".to_string()],
            skills: vec!["React Native".to_string(), "TypeScript".to_string()],
            highlights: vec![Highlight {
                project: "Checkout rewrite".to_string(),
                role: "Frontend lead".to_string(),
                problem: "Checkout dropped frames on mid-range devices.".to_string(),
                solve: "Split the cart store and memoized list rows.".to_string(),
                effect: "Stable 60fps and a 12% conversion lift.".to_string(),
            }],
            etcs: vec!["Ran the weekly frontend guild".to_string()],
        }],
        educations: vec![EducationEntry {
            title: "Computer Science, Sample University".to_string(),
            time: "2013 - 2017".to_string(),
            descriptions: vec!["B.S., graphics minor".to_string()],
        }],
        portfolios: vec![PortfolioEntry {
            title: "Open Chat".to_string(),
            time: "2023".to_string(),
            duration: "6 months".to_string(),
            images: vec!["chat_home.png".to_string(), "chat_thread.png".to_string()],
            body_html: "<p>Realtime chat client with <strong>offline-first</strong> sync \
                        and optimistic sends.</p><ul><li>CRDT-backed drafts</li>\
                        <li>Push-driven thread updates</li></ul>"
                .to_string(),
            frontend: vec!["React Native".to_string(), "Zustand".to_string()],
            deployment: vec!["App Store".to_string(), "Play Store".to_string()],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        content_path: String,
        output_path: String,
        archive: bool,
    }

    impl MockConfig {
        fn new(content_path: &str) -> Self {
            Self {
                content_path: content_path.to_string(),
                output_path: "test_output".to_string(),
                archive: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
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

    #[tokio::test]
    async fn test_collect_missing_file_falls_back_to_sample() {
        let pipeline = SitePipeline::new(MockStorage::new(), MockConfig::new("/no/such/file.toml"));
        let content = pipeline.collect().await.unwrap();
        assert_eq!(content.title, "Sample Portfolio");
        assert!(!content.careers.is_empty());
    }

    #[tokio::test]
    async fn test_render_page_count_and_manifest() {
        let pipeline = SitePipeline::new(MockStorage::new(), MockConfig::new("unused"));
        let result = pipeline.render(sample_content()).await.unwrap();

        assert_eq!(result.pages.len(), 3);

        let manifest: serde_json::Value = serde_json::from_str(&result.manifest_json).unwrap();
        assert_eq!(manifest["site"], "Sample Portfolio");
        assert_eq!(manifest["counts"]["careers"], 1);
        assert_eq!(manifest["counts"]["portfolios"], 1);
        assert_eq!(manifest["pages"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_render_empty_collections_still_produces_pages() {
        let pipeline = SitePipeline::new(MockStorage::new(), MockConfig::new("unused"));
        let mut content = sample_content();
        content.careers.clear();
        content.educations.clear();
        content.portfolios.clear();

        let result = pipeline.render(content).await.unwrap();
        assert_eq!(result.pages.len(), 3);

        let portfolio = result
            .pages
            .iter()
            .find(|p| p.path == "portfolio.html")
            .unwrap();
        assert!(portfolio.html.contains(r#"<section id="project""#));

        let manifest: serde_json::Value = serde_json::from_str(&result.manifest_json).unwrap();
        assert_eq!(manifest["counts"]["portfolios"], 0);
    }

    #[tokio::test]
    async fn test_render_sanitizes_portfolio_body() {
        let pipeline = SitePipeline::new(MockStorage::new(), MockConfig::new("unused"));
        let mut content = sample_content();
        content.portfolios[0].body_html =
            "<p>ok</p><script>alert(1)</script>".to_string();

        let result = pipeline.render(content).await.unwrap();
        let portfolio = result
            .pages
            .iter()
            .find(|p| p.path == "portfolio.html")
            .unwrap();
        assert!(portfolio.html.contains("<p>ok</p>"));
        assert!(!portfolio.html.contains("<script>"));
    }

    #[tokio::test]
    async fn test_publish_writes_pages_and_manifest() {
        let storage = MockStorage::new();
        let pipeline = SitePipeline::new(storage.clone(), MockConfig::new("unused"));

        let result = pipeline.render(sample_content()).await.unwrap();
        let output_path = pipeline.publish(result).await.unwrap();

        assert_eq!(output_path, "test_output");
        for file in ["index.html", "career.html", "portfolio.html", "manifest.json"] {
            assert!(storage.get_file(file).await.is_some(), "missing {}", file);
        }
        assert!(storage.get_file(ARCHIVE_NAME).await.is_none());
    }

    #[tokio::test]
    async fn test_publish_with_archive() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new("unused");
        config.archive = true;
        let pipeline = SitePipeline::new(storage.clone(), config);

        let result = pipeline.render(sample_content()).await.unwrap();
        pipeline.publish(result).await.unwrap();

        let zip_data = storage.get_file(ARCHIVE_NAME).await.unwrap();
        let cursor = std::io::Cursor::new(zip_data);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();

        assert_eq!(archive.len(), 4);

        let mut file_names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        file_names.sort();
        assert_eq!(
            file_names,
            vec!["career.html", "index.html", "manifest.json", "portfolio.html"]
        );
    }
}
