/// Text to condense, with an optional target language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
    pub text: String,
    /// BCP 47 style tag (e.g. "en", "hi", "es")
    pub language: Option<String>,
}

impl SummarizationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Generated summary; never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationResult {
    pub summary: String,
    /// Model that produced the summary, as reported by the provider
    pub model: String,
}
