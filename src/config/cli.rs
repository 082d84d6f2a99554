use crate::core::DataSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Filesystem-backed roster source. Reads the whole file on every call;
/// nothing is cached between reads.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn read(&self) -> Result<String> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        Ok(raw)
    }
}
