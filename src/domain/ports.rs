use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only source of raw roster text. Each call re-reads the source;
/// nothing is cached between reads.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn read(&self) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn database_path(&self) -> &str;
    fn port(&self) -> u16;
}
