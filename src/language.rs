use regex::Regex;

/// Heuristic English-language check for video titles and descriptions.
///
/// Text is rejected when it names another language as a whole word or
/// contains any character outside the 7-bit ASCII range. This is a fixed
/// rule, not language identification; it lives behind this type so it can
/// be swapped for a real detector without touching callers.
pub struct LanguageFilter {
    language_names: Regex,
}

impl LanguageFilter {
    pub fn new() -> Self {
        let language_names = Regex::new(
            r"(?i)\b(?:Hindi|Chinese|French|German|Spanish|Japanese|Korean|Russian)\b",
        )
        .expect("language name pattern is valid");

        Self { language_names }
    }

    /// Returns true if the text is judged to be English.
    pub fn is_english(&self, text: &str) -> bool {
        if !text.is_ascii() {
            return false;
        }

        !self.language_names.is_match(text)
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        Self::new()
    }
}
