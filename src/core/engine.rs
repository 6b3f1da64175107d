use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives the collect/render/publish stages of a site build.
pub struct SiteEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> SiteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting site build...");

        tracing::info!("Collecting content...");
        let content = self.pipeline.collect().await?;
        tracing::info!(
            "Collected {} career, {} education, {} portfolio entries",
            content.careers.len(),
            content.educations.len(),
            content.portfolios.len()
        );
        self.monitor.log_stats("Collect");

        tracing::info!("Rendering pages...");
        let result = self.pipeline.render(content).await?;
        tracing::info!("Rendered {} pages", result.pages.len());
        self.monitor.log_stats("Render");

        tracing::info!("Publishing site...");
        let output_path = self.pipeline.publish(result).await?;
        tracing::info!("Site published to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}
