use job_digest::core::ConfigProvider;
use job_digest::utils::{logger, validation::Validate};
use job_digest::{DigestEngine, FeedPipeline, LocalStorage, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "digest.toml".to_string());

    logger::init_cli_logger(false);
    tracing::info!("Loading digest config from: {}", config_path);

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = FeedPipeline::new(storage, config);
    let engine = DigestEngine::new(pipeline);

    let output_path = engine.run().await?;
    println!("✅ Digest run completed successfully!");
    println!("📁 Report saved to: {}", output_path);

    Ok(())
}
