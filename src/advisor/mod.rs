//! AI advice service integration
//!
//! Wraps the text generation service behind [`AdviceSource`] and degrades
//! every failure to a usable fallback value.

pub mod error;
pub mod gemini;
pub mod prompts;

pub use error::AdvisorError;
pub use gemini::GeminiClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::advice::{build_bundle, HeaderSchema, SuggestionBundle, Tail};

/// Classifier labels that need no treatment plan
pub const HEALTHY_CONDITIONS: [&str; 3] = [
    "healthy banana",
    "leaf banana healthy leaf",
    "leaf banana natural death",
];

/// A text generation service: prompt in, free text out
#[async_trait]
pub trait AdviceSource: Send + Sync {
    async fn generate(&self, prompt: &str) -> error::Result<String>;
}

/// Whether a classifier label denotes a healthy plant
pub fn is_healthy(disease_name: &str) -> bool {
    let name = disease_name.trim().to_lowercase();
    HEALTHY_CONDITIONS.iter().any(|c| *c == name)
}

/// Fetch and parse treatment advice for a diagnosed disease.
///
/// Healthy plants get canned advice without a service call. A service
/// failure is logged and yields [`SuggestionBundle::unavailable`].
pub async fn suggest_treatment(source: &dyn AdviceSource, disease_name: &str) -> SuggestionBundle {
    if is_healthy(disease_name) {
        return SuggestionBundle::healthy();
    }

    match source.generate(&prompts::treatment_prompt(disease_name)).await {
        Ok(text) => build_bundle(&text),
        Err(e) => {
            warn!("Advice service error for {:?}: {}", disease_name, e);
            SuggestionBundle::unavailable()
        }
    }
}

/// A short agricultural news item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub headline: String,
    pub summary: String,
}

const NEWS_HEADERS: [&str; 2] = ["Headline", "Summary"];

/// Split a news response into headline and summary.
///
/// When either heading is missing the whole response becomes the summary.
pub fn parse_news(text: &str) -> NewsItem {
    let schema = HeaderSchema::new(&NEWS_HEADERS, Tail::EndOfText);
    let parts = schema.split(text);

    match (
        parts.first().and_then(|p| p.as_str()),
        parts.get(1).and_then(|p| p.as_str()),
    ) {
        (Some(headline), Some(summary)) => NewsItem {
            headline: headline.replace("**", ""),
            summary: summary.to_string(),
        },
        _ => NewsItem {
            headline: "Latest News".to_string(),
            summary: text.to_string(),
        },
    }
}

/// Fetch a news item, falling back to a placeholder when the service fails
pub async fn fetch_news(source: &dyn AdviceSource) -> NewsItem {
    match source.generate(prompts::NEWS_PROMPT).await {
        Ok(text) => parse_news(&text),
        Err(e) => {
            warn!("Advice service error (news): {}", e);
            NewsItem {
                headline: "Insights Unavailable".to_string(),
                summary: "AI-powered insights are currently being updated. Please check back soon."
                    .to_string(),
            }
        }
    }
}

/// Classifier result for one photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisSummary {
    pub disease_name: String,

    /// Classifier confidence in percent
    pub confidence: f32,
}

impl DiagnosisSummary {
    pub fn new(disease_name: impl Into<String>, confidence: f32) -> Self {
        Self {
            disease_name: disease_name.into(),
            confidence,
        }
    }
}

/// Summarise treatment progress between two diagnoses of the same plant
pub async fn compare_diagnoses(
    source: &dyn AdviceSource,
    old: &DiagnosisSummary,
    new: &DiagnosisSummary,
) -> String {
    match source.generate(&prompts::comparison_prompt(old, new)).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Advice service error (comparison): {}", e);
            "Could not generate a comparison at this time.".to_string()
        }
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays one canned reply, counting calls
    pub struct ScriptedSource {
        reply: Option<String>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing() -> Self {
            Self {
                reply: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AdviceSource for ScriptedSource {
        async fn generate(&self, _prompt: &str) -> error::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().ok_or(AdvisorError::ApiError {
                status: 503,
                message: "unavailable".to_string(),
            })
        }
    }
}
