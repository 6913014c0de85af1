//! Lenient JSON extraction from model replies.
//!
//! Two explicit stages with a tagged result, so failure causes stay
//! inspectable instead of being swallowed:
//! 1. strict parse of the whole (trimmed) reply;
//! 2. strict parse of the contents of the first fenced code block.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Matches ```json ... ``` or ``` ... ```, keeping the inner text.
static FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("fence regex is valid"));

/// Which stage recovered the JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionSource {
    /// The whole reply was valid JSON.
    Direct,
    /// The JSON came from inside a fenced code block.
    FencedBlock,
}

#[derive(Debug)]
pub struct Extracted {
    pub value: Value,
    pub source: ExtractionSource,
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("reply is not valid JSON and contains no fenced code block: {0}")]
    NoJson(serde_json::Error),

    #[error("fenced block does not contain valid JSON: {0}")]
    FencedBlockInvalid(serde_json::Error),
}

/// Extracts the evaluation JSON from a model reply.
pub fn extract_json(reply: &str) -> Result<Extracted, ExtractError> {
    let trimmed = reply.trim();

    let direct_err = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => {
            return Ok(Extracted {
                value,
                source: ExtractionSource::Direct,
            })
        }
        Err(e) => e,
    };

    match FENCED_BLOCK.captures(trimmed) {
        Some(caps) => {
            let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            match serde_json::from_str::<Value>(inner) {
                Ok(value) => Ok(Extracted {
                    value,
                    source: ExtractionSource::FencedBlock,
                }),
                Err(e) => Err(ExtractError::FencedBlockInvalid(e)),
            }
        }
        None => Err(ExtractError::NoJson(direct_err)),
    }
}
