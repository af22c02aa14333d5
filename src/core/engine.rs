use crate::core::Pipeline;
use crate::utils::error::Result;
use chrono::Utc;

/// Drives one digest run: extract feeds, rank the combined batch, write the
/// report. Holds no state across runs.
pub struct DigestEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DigestEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting job digest run");

        let raw_postings = self.pipeline.extract().await?;
        tracing::info!("📥 Collected {} raw postings", raw_postings.len());

        let ranked = self.pipeline.rank(raw_postings, Utc::now());
        tracing::info!("🎯 {} postings after filtering and ranking", ranked.len());

        let output_path = self.pipeline.load(&ranked).await?;
        tracing::info!("💾 Digest saved to: {}", output_path);

        Ok(output_path)
    }
}
