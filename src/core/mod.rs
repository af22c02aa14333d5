pub mod dedup;
pub mod engine;
pub mod experience;
pub mod pipeline;
pub mod posted_time;
pub mod ranking;
pub mod skills;

pub use crate::domain::model::{FilterConfig, Posting};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
