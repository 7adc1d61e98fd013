//! Python Tutor - Rust Implementation
//!
//! Educational assistant that answers Python questions through a hosted chat
//! endpoint and finds the top-rated YouTube tutorial for each concept in the
//! user's question.

pub mod chat;
pub mod concepts;
pub mod config;
pub mod language;
pub mod ranking;
pub mod selector;
pub mod youtube;

// Re-export main types for easy access
pub use crate::chat::{ChatClient, ChatMessage};
pub use crate::concepts::ConceptParser;
pub use crate::config::{ChatConfig, Config, ConfigBuilder, RankingConfig, SearchConfig};
pub use crate::language::LanguageFilter;
pub use crate::ranking::{RankedTutorial, RelevanceScorer};
pub use crate::selector::{ConceptTutorials, ResultSet, TutorialSelector};
pub use crate::youtube::{
    EngagementStats, StatsProvider, VideoCandidate, VideoSearch, VideoSearchClient,
    VideoStatsClient,
};

/// Result type for assistant operations
pub type Result<T> = std::result::Result<T, TutorError>;

/// Error types for assistant operations
#[derive(thiserror::Error, Debug)]
pub enum TutorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("missing data: {0}")]
    MissingData(String),

    #[error("no usable concepts in query")]
    EmptyQuery,

    #[error("configuration error: {0}")]
    Configuration(String),
}
