use clap::Parser;
use job_digest::utils::{logger, validation::Validate};
use job_digest::{CliConfig, DigestEngine, FeedPipeline, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting job-digest CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = FeedPipeline::new(storage, config);
    let engine = DigestEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Digest run completed successfully!");
            println!("✅ Digest run completed successfully!");
            println!("📁 Report saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Digest run failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
