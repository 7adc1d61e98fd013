use regex::Regex;
use tracing::debug;

/// Phrase appended to a concept that is not already scoped to Python
const PYTHON_SCOPE: &str = "in Python";

/// Splits a free-text question into discrete learning concepts.
///
/// A question like "loops, recursion and decorators" yields one concept per
/// topic, each suffixed with "in Python" so downstream searches stay on
/// target. Duplicates are kept since each concept is queried independently.
pub struct ConceptParser {
    separator: Regex,
}

impl ConceptParser {
    pub fn new() -> Self {
        // Commas, "and", "or" act as separators; surrounding whitespace is
        // absorbed and the words match case-insensitively.
        let separator =
            Regex::new(r"\s*,\s*|\s+(?i:and|or)\s+").expect("concept separator pattern is valid");

        Self { separator }
    }

    /// Parse a raw question into an ordered list of concepts.
    ///
    /// Empty or whitespace-only input yields an empty list; callers decide
    /// how to surface that to the user.
    pub fn parse(&self, query: &str) -> Vec<String> {
        let concepts: Vec<String> = self
            .separator
            .split(query)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| {
                if piece.contains(PYTHON_SCOPE) {
                    piece.to_string()
                } else {
                    format!("{} {}", piece, PYTHON_SCOPE)
                }
            })
            .collect();

        debug!("Parsed {} concepts from query", concepts.len());
        concepts
    }
}

impl Default for ConceptParser {
    fn default() -> Self {
        Self::new()
    }
}
