use super::{watch_url, VideoCandidate, VideoSearch};
use crate::config::SearchConfig;
use crate::language::LanguageFilter;
use crate::{Result, TutorError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

/// Client for the YouTube Data API `search.list` endpoint.
///
/// Issues a relevance-ordered, video-only search per concept and drops
/// candidates whose title or description fails the English filter.
pub struct VideoSearchClient {
    config: SearchConfig,
    client: reqwest::Client,
    language_filter: LanguageFilter,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    snippet: SearchSnippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchSnippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "channelTitle")]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

impl VideoSearchClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        if config.api_key.is_none() {
            return Err(TutorError::Configuration(
                "YouTube API key required for video search".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            config,
            client,
            language_filter: LanguageFilter::new(),
        })
    }

    fn request_url(&self, concept: &str, api_key: &str) -> String {
        format!(
            "{}?part=snippet&q={}&type=video&order=relevance&maxResults={}&relevanceLanguage={}&key={}",
            SEARCH_ENDPOINT,
            urlencoding::encode(concept),
            self.config.max_results,
            self.config.relevance_language,
            api_key
        )
    }
}

#[async_trait]
impl VideoSearch for VideoSearchClient {
    async fn search(&self, concept: &str) -> Result<Vec<VideoCandidate>> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| TutorError::Configuration("YouTube API key not set".to_string()))?;

        debug!("Searching videos for: {}", concept);

        let response = self.client.get(self.request_url(concept, api_key)).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(TutorError::Api { status, body });
        }

        let search_response: SearchResponse = response.json().await?;

        let mut candidates = Vec::new();
        for item in search_response.items {
            // Non-video results carry no video id
            let video_id = match item.id.video_id {
                Some(id) => id,
                None => continue,
            };

            let snippet = item.snippet;
            if !self.language_filter.is_english(&snippet.title)
                || !self.language_filter.is_english(&snippet.description)
            {
                debug!("Dropping non-English candidate: {}", snippet.title);
                continue;
            }

            candidates.push(VideoCandidate {
                url: watch_url(&video_id),
                video_id,
                title: snippet.title,
                channel_title: snippet.channel_title,
                published_at: snippet.published_at,
            });
        }

        debug!("{} candidates survived filtering for '{}'", candidates.len(), concept);
        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "items": [
            {
                "id": { "videoId": "abc123def45" },
                "snippet": {
                    "title": "Python Loops Tutorial",
                    "description": "Learn for and while loops",
                    "channelTitle": "CodeAcademy",
                    "publishedAt": "2023-06-01T12:00:00Z"
                }
            },
            {
                "id": { "videoId": "xyz987uvw65" },
                "snippet": {
                    "title": "पायथन लूप्स",
                    "description": "Hindi tutorial",
                    "channelTitle": "DesiCode",
                    "publishedAt": "2023-07-01T12:00:00Z"
                }
            },
            {
                "id": { "channelId": "UCsomething" },
                "snippet": {
                    "title": "A channel, not a video",
                    "channelTitle": "Someone",
                    "publishedAt": "2023-01-01T00:00:00Z"
                }
            }
        ]
    }"#;

    #[test]
    fn test_response_deserialization() {
        let parsed: SearchResponse = serde_json::from_str(SAMPLE_RESPONSE).unwrap();
        assert_eq!(parsed.items.len(), 3);
        assert_eq!(parsed.items[0].id.video_id.as_deref(), Some("abc123def45"));
        assert_eq!(parsed.items[0].snippet.channel_title, "CodeAcademy");
        assert!(parsed.items[2].id.video_id.is_none());
        // Missing description defaults to empty
        assert!(parsed.items[2].snippet.description.is_empty());
    }

    #[test]
    fn test_request_url_encodes_query() {
        let config = SearchConfig {
            api_key: Some("test-key".to_string()),
            max_results: 2,
            relevance_language: "en".to_string(),
            timeout_seconds: 30,
        };
        let client = VideoSearchClient::new(config).unwrap();
        let url = client.request_url("loops in Python", "test-key");

        assert!(url.starts_with(SEARCH_ENDPOINT));
        assert!(url.contains("q=loops%20in%20Python"));
        assert!(url.contains("type=video"));
        assert!(url.contains("order=relevance"));
        assert!(url.contains("maxResults=2"));
        assert!(url.contains("relevanceLanguage=en"));
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        let config = SearchConfig {
            api_key: None,
            max_results: 2,
            relevance_language: "en".to_string(),
            timeout_seconds: 30,
        };
        assert!(matches!(
            VideoSearchClient::new(config),
            Err(TutorError::Configuration(_))
        ));
    }
}
