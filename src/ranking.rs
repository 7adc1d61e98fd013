use crate::youtube::EngagementStats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Fixed heuristic scoring weights, not values derived from data.
const RELEVANCE_WEIGHT: f64 = 0.6;
const ENGAGEMENT_WEIGHT: f64 = 0.2;
const VIEW_WEIGHT: f64 = 0.1;
const COMMENT_WEIGHT: f64 = 0.2;
const VIEW_SCALE: f64 = 1_000_000.0;
const COMMENT_SCALE: f64 = 1_000.0;
const MAX_RATING: f64 = 10.0;

/// A scored tutorial, the final output unit per concept
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankedTutorial {
    /// Video title
    pub title: String,
    /// Channel the video was published on
    pub channel_name: String,
    /// Publish timestamp
    pub date_uploaded: DateTime<Utc>,
    /// Composite rating in [0, 10], one decimal
    pub rating: f64,
    /// Canonical watch URL
    pub url: String,
    /// YouTube video id
    pub video_id: String,
}

/// Computes title relevance and the composite 0-10 rating.
pub struct RelevanceScorer;

impl RelevanceScorer {
    /// Binary title relevance: 1.0 when the concept appears in the title,
    /// case-insensitively, else 0.0. Deliberately coarse; no fuzzy matching.
    pub fn title_relevance(title: &str, concept: &str) -> f64 {
        if title.to_lowercase().contains(&concept.to_lowercase()) {
            1.0
        } else {
            0.0
        }
    }

    /// Composite rating blending relevance with engagement metrics,
    /// scaled to [0, 10] and rounded to one decimal.
    pub fn rating(stats: &EngagementStats, title_relevance: f64) -> f64 {
        let views = stats.views as f64;
        let normalized_views = views / VIEW_SCALE;
        let normalized_comments = stats.comments as f64 / COMMENT_SCALE;
        // The +1 keeps the ratio defined for zero-view videos
        let engagement_ratio = stats.likes as f64 / (views + 1.0);

        let raw = RELEVANCE_WEIGHT * title_relevance
            + ENGAGEMENT_WEIGHT * engagement_ratio
            + VIEW_WEIGHT * normalized_views
            + COMMENT_WEIGHT * normalized_comments;

        let scaled = (raw * 10.0).min(MAX_RATING);
        (scaled * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(views: u64, likes: u64, comments: u64) -> EngagementStats {
        EngagementStats {
            views,
            likes,
            comments,
        }
    }

    #[test]
    fn test_title_relevance_match() {
        assert_eq!(
            RelevanceScorer::title_relevance("Python Loops Tutorial", "loops"),
            1.0
        );
        assert_eq!(
            RelevanceScorer::title_relevance("LOOPS IN PYTHON", "loops in python"),
            1.0
        );
    }

    #[test]
    fn test_title_relevance_no_match() {
        assert_eq!(
            RelevanceScorer::title_relevance("Intro to Arrays", "loops"),
            0.0
        );
    }

    #[test]
    fn test_rating_reference_values() {
        // raw = 0.6 + 0.2*(10000/1000001) + 0.1 + 0.2 ≈ 0.902 → 9.0
        let rating = RelevanceScorer::rating(&stats(1_000_000, 10_000, 1_000), 1.0);
        assert_eq!(rating, 9.0);
    }

    #[test]
    fn test_rating_is_capped_at_ten() {
        let rating = RelevanceScorer::rating(&stats(50_000_000, 2_000_000, 100_000), 1.0);
        assert_eq!(rating, 10.0);
    }

    #[test]
    fn test_rating_with_zero_views() {
        // Engagement ratio stays defined; everything else contributes nothing
        let rating = RelevanceScorer::rating(&stats(0, 0, 0), 0.0);
        assert_eq!(rating, 0.0);
    }

    #[test]
    fn test_rating_rounds_to_one_decimal() {
        // raw = 0.6 → 6.0 exactly
        let rating = RelevanceScorer::rating(&stats(0, 0, 0), 1.0);
        assert_eq!(rating, 6.0);

        // Comments alone: 0.2 * (250/1000) = 0.05 → 0.5
        let rating = RelevanceScorer::rating(&stats(0, 0, 250), 0.0);
        assert_eq!(rating, 0.5);
    }
}
