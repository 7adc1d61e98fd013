use super::{EngagementStats, StatsProvider};
use crate::config::SearchConfig;
use crate::{Result, TutorError};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const VIDEOS_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/videos";

/// Client for the YouTube Data API `videos.list` endpoint.
///
/// Fetches per-video statistics. The API reports counts as numeric strings;
/// a missing view count is an error, missing like/comment counts default
/// to zero.
pub struct VideoStatsClient {
    config: SearchConfig,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    statistics: Statistics,
}

#[derive(Debug, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "likeCount")]
    like_count: Option<String>,
    #[serde(rename = "commentCount")]
    comment_count: Option<String>,
}

impl VideoStatsClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        if config.api_key.is_none() {
            return Err(TutorError::Configuration(
                "YouTube API key required for statistics lookup".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { config, client })
    }
}

/// Parse a required numeric-string count
fn parse_required(value: Option<String>, field: &str, video_id: &str) -> Result<u64> {
    let raw = value.ok_or_else(|| {
        TutorError::MissingData(format!("video {} has no {}", video_id, field))
    })?;
    raw.parse::<u64>().map_err(|_| {
        TutorError::MissingData(format!("video {} has malformed {}: {}", video_id, field, raw))
    })
}

/// Parse an optional numeric-string count, defaulting to zero when absent
fn parse_optional(value: Option<String>, field: &str, video_id: &str) -> Result<u64> {
    match value {
        Some(raw) => raw.parse::<u64>().map_err(|_| {
            TutorError::MissingData(format!("video {} has malformed {}: {}", video_id, field, raw))
        }),
        None => Ok(0),
    }
}

#[async_trait]
impl StatsProvider for VideoStatsClient {
    async fn stats(&self, video_id: &str) -> Result<EngagementStats> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| TutorError::Configuration("YouTube API key not set".to_string()))?;

        let url = format!(
            "{}?part=statistics&id={}&key={}",
            VIDEOS_ENDPOINT,
            urlencoding::encode(video_id),
            api_key
        );

        debug!("Fetching statistics for video: {}", video_id);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::Api { status, body });
        }

        let videos: VideosResponse = response.json().await?;

        let item = videos.items.into_iter().next().ok_or_else(|| {
            TutorError::MissingData(format!("no statistics returned for video {}", video_id))
        })?;

        let statistics = item.statistics;
        Ok(EngagementStats {
            views: parse_required(statistics.view_count, "viewCount", video_id)?,
            likes: parse_optional(statistics.like_count, "likeCount", video_id)?,
            comments: parse_optional(statistics.comment_count, "commentCount", video_id)?,
        })
    }
}
