pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::TomlConfig, CliConfig};
pub use core::{engine::DigestEngine, pipeline::FeedPipeline, ranking::RankingPipeline};
pub use domain::model::{FilterConfig, Posting};
pub use utils::error::{DigestError, Result};
