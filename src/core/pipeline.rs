use crate::core::ranking::RankingPipeline;
use crate::core::{ConfigProvider, Pipeline, Posting, Storage};
use crate::utils::error::{DigestError, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use url::Url;

pub const REPORT_FILENAME: &str = "job_digest.csv";

/// Known job portal domains, used to label postings whose source tag the
/// feed left empty.
const SOURCE_DOMAINS: [(&str, &str); 9] = [
    ("naukri.com", "Naukri"),
    ("shine.com", "Shine"),
    ("monster.com", "Monster"),
    ("glassdoor.com", "Glassdoor"),
    ("freshersworld.com", "FreshersWorld"),
    ("timesjobs.com", "TimesJobs"),
    ("instahyre.com", "Instahyre"),
    ("linkedin.com", "LinkedIn"),
    ("indeed.com", "Indeed"),
];

/// The I/O shell around the ranking core: pulls raw posting feeds over HTTP,
/// hands the combined batch to the pure `RankingPipeline`, and writes the
/// ranked result as a CSV digest through the storage port.
pub struct FeedPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    ranking: RankingPipeline,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> FeedPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let ranking = RankingPipeline::new(config.filter_config());
        Self {
            storage,
            config,
            ranking,
            client: Client::new(),
        }
    }

    async fn fetch_feed(&self, endpoint: &str) -> Result<Vec<Posting>> {
        tracing::debug!("Fetching posting feed: {}", endpoint);
        let response = self.client.get(endpoint).send().await?;
        tracing::debug!("Feed response status: {}", response.status());

        if !response.status().is_success() {
            tracing::warn!(
                "Feed {} returned status {}, skipping",
                endpoint,
                response.status()
            );
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let mut postings: Vec<Posting> = serde_json::from_str(&body)?;
        for posting in &mut postings {
            if posting.source.is_empty() {
                posting.source = source_label(endpoint);
            }
        }
        Ok(postings)
    }
}

/// Derives a human-readable source tag from a feed URL's domain.
pub fn source_label(endpoint: &str) -> String {
    let Some(host) = Url::parse(endpoint)
        .ok()
        .and_then(|url| url.host_str().map(|h| h.to_lowercase()))
    else {
        return "Web".to_string();
    };

    for (domain, label) in SOURCE_DOMAINS {
        if host == domain || host.ends_with(&format!(".{}", domain)) {
            return label.to_string();
        }
    }
    format!("Web ({})", host)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FeedPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Posting>> {
        let mut postings = Vec::new();
        for endpoint in self.config.feed_endpoints() {
            let batch = self.fetch_feed(endpoint).await?;
            tracing::info!("📡 {} postings from {}", batch.len(), endpoint);
            postings.extend(batch);
        }
        Ok(postings)
    }

    fn rank(&self, postings: Vec<Posting>, now: DateTime<Utc>) -> Vec<Posting> {
        self.ranking.run(postings, now)
    }

    async fn load(&self, postings: &[Posting]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "source",
            "title",
            "company",
            "location",
            "posted",
            "link",
            "skill_score",
            "skills_found",
            "experience",
            "experience_match_score",
            "posting_time",
        ])?;

        for posting in postings {
            let skill_score = posting.skill_score.to_string();
            let skills_found = posting.skills_found.join(", ");
            let match_score = posting.experience_match_score.to_string();
            let posting_time = posting
                .posting_instant
                .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default();

            writer.write_record([
                posting.source.as_str(),
                posting.title.as_str(),
                posting.company.as_str(),
                posting.location.as_str(),
                posting.posted_text.as_str(),
                posting.link.as_str(),
                skill_score.as_str(),
                skills_found.as_str(),
                posting.experience_text.as_str(),
                match_score.as_str(),
                posting_time.as_str(),
            ])?;
        }

        let data = writer
            .into_inner()
            .map_err(|e| DigestError::ProcessingError {
                message: format!("CSV buffer error: {}", e),
            })?;
        self.storage.write_file(REPORT_FILENAME, &data).await?;

        Ok(format!(
            "{}/{}",
            self.config.output_path(),
            REPORT_FILENAME
        ))
    }
}
