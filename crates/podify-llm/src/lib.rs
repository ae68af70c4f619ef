//! Summarization adapter for Podify
//!
//! Condenses user text into a podcast-style summary through an
//! OpenAI-compatible chat completion endpoint.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
pub mod protocol;
mod summarizer;
mod types;

pub use error::{LlmError, Result};
pub use summarizer::{OpenAiSummarizer, SYSTEM_PROMPT, Summarizer};
pub use types::{SummarizationRequest, SummarizationResult};
