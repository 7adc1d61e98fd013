use crate::concepts::ConceptParser;
use crate::config::RankingConfig;
use crate::ranking::{RankedTutorial, RelevanceScorer};
use crate::youtube::{StatsProvider, VideoSearch};
use crate::{Result, TutorError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Ranked tutorials for a single concept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConceptTutorials {
    /// The concept as produced by the parser
    pub concept: String,
    /// Top-rated tutorials, best first; may be empty
    pub tutorials: Vec<RankedTutorial>,
}

/// Ordered per-concept results of one selection run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub entries: Vec<ConceptTutorials>,
}

impl ResultSet {
    /// Look up the tutorials selected for a concept
    pub fn get(&self, concept: &str) -> Option<&[RankedTutorial]> {
        self.entries
            .iter()
            .find(|entry| entry.concept == concept)
            .map(|entry| entry.tutorials.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConceptTutorials> {
        self.entries.iter()
    }
}

/// Orchestrates the tutorial selection pipeline.
///
/// Drives parsing, per-concept search, statistics lookup, scoring and
/// top-N selection. Concepts are processed strictly sequentially; a failed
/// search aborts the entire run so callers never see a partial ResultSet.
pub struct TutorialSelector {
    parser: ConceptParser,
    search: Box<dyn VideoSearch>,
    stats: Box<dyn StatsProvider>,
    config: RankingConfig,
}

impl TutorialSelector {
    pub fn new(
        search: Box<dyn VideoSearch>,
        stats: Box<dyn StatsProvider>,
        config: RankingConfig,
    ) -> Self {
        Self {
            parser: ConceptParser::new(),
            search,
            stats,
            config,
        }
    }

    /// Find the top-rated tutorials for every concept in the query.
    ///
    /// Returns the per-concept results in parse order, or the first search
    /// error encountered.
    pub async fn find_top_rated(&self, query: &str) -> Result<ResultSet> {
        let concepts = self.parser.parse(query);
        if concepts.is_empty() {
            return Err(TutorError::EmptyQuery);
        }

        info!("🔎 Ranking tutorials for {} concepts", concepts.len());

        let mut entries = Vec::with_capacity(concepts.len());
        for concept in concepts {
            let tutorials = self.rank_concept(&concept).await?;
            entries.push(ConceptTutorials { concept, tutorials });
        }

        Ok(ResultSet { entries })
    }

    async fn rank_concept(&self, concept: &str) -> Result<Vec<RankedTutorial>> {
        // A failed search aborts the whole run, not just this concept
        let candidates = self.search.search(concept).await?;
        debug!("{} candidates for '{}'", candidates.len(), concept);

        let mut ranked = Vec::new();
        for candidate in candidates {
            let stats = match self.stats.stats(&candidate.video_id).await {
                Ok(stats) => stats,
                Err(TutorError::MissingData(reason)) => {
                    // A broken stats payload fails the single video only
                    warn!("Skipping video {}: {}", candidate.video_id, reason);
                    continue;
                }
                Err(e) => return Err(e),
            };

            if stats.comments < self.config.min_comments {
                debug!(
                    "Dropping {} below comment floor ({} < {})",
                    candidate.video_id, stats.comments, self.config.min_comments
                );
                continue;
            }

            let relevance = RelevanceScorer::title_relevance(&candidate.title, concept);
            let rating = RelevanceScorer::rating(&stats, relevance);

            ranked.push(RankedTutorial {
                title: candidate.title,
                channel_name: candidate.channel_title,
                date_uploaded: candidate.published_at,
                rating,
                url: candidate.url,
                video_id: candidate.video_id,
            });
        }

        // Stable sort: equal ratings keep discovery order
        ranked.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(self.config.top_n);

        Ok(ranked)
    }
}
