//! YouTube Data API clients for tutorial discovery.
//!
//! This module provides the search client that turns a learning concept into
//! candidate videos and the statistics client that fetches the engagement
//! numbers used for ranking.

pub mod search;
pub mod stats;

// Re-export main types
pub use search::VideoSearchClient;
pub use stats::VideoStatsClient;

use crate::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video returned by search, before ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoCandidate {
    /// YouTube video id
    pub video_id: String,
    /// Video title
    pub title: String,
    /// Canonical watch URL
    pub url: String,
    /// Channel the video was published on
    pub channel_title: String,
    /// Publish timestamp
    pub published_at: DateTime<Utc>,
}

/// Engagement statistics for a single video
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngagementStats {
    /// View count (required upstream)
    pub views: u64,
    /// Like count, 0 when hidden
    pub likes: u64,
    /// Comment count, 0 when disabled
    pub comments: u64,
}

/// Build the canonical watch URL for a video id
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Trait for video search backends
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Return language-filtered candidates for a concept, most relevant first.
    async fn search(&self, concept: &str) -> Result<Vec<VideoCandidate>>;
}

/// Trait for engagement statistics lookup
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Fetch the engagement statistics for a video id.
    async fn stats(&self, video_id: &str) -> Result<EngagementStats>;
}
