use crate::domain::model::{FilterConfig, Posting};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Destination for the digest report. The pipeline only ever writes.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn feed_endpoints(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn filter_config(&self) -> FilterConfig;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Posting>>;
    /// Pure, synchronous: dedupe, enrich, filter and order the batch.
    fn rank(&self, postings: Vec<Posting>, now: DateTime<Utc>) -> Vec<Posting>;
    async fn load(&self, postings: &[Posting]) -> Result<String>;
}
