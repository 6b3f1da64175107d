use crate::domain::model::{RenderResult, SiteContent};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Write-side output sink; content loading is synchronous config parsing and
/// stays outside the port.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn content_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn archive(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn collect(&self) -> Result<SiteContent>;
    async fn render(&self, content: SiteContent) -> Result<RenderResult>;
    async fn publish(&self, result: RenderResult) -> Result<String>;
}
