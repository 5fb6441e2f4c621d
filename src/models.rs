//! Wire models for the advice API.
//!
//! Field names and shapes are the backend's contract: `gemini_connected`,
//! `ai_model`, and timezone-naive `created_at` timestamps included.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{LukmanError, Result};

/// Minimum question length accepted by the service, in characters.
pub const QUESTION_MIN_CHARS: usize = 10;

/// Maximum question length accepted by the service, in characters.
pub const QUESTION_MAX_CHARS: usize = 1000;

/// Maximum patient age accepted by the service.
pub const AGE_MAX: u32 = 150;

/// A patient's question, posted to `/advice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalQuestion {
    /// Free-text question, 10-1000 characters.
    pub question: String,
    /// Patient age, 0-150. Optional.
    pub age: Option<u32>,
    /// Patient gender ("erkek" or "aýal" in the original UI). Optional and
    /// not validated here; the service treats it as free text.
    pub gender: Option<String>,
}

impl MedicalQuestion {
    /// Build a question with no demographic details.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            age: None,
            gender: None,
        }
    }

    /// Reject inputs the service would refuse, before any network call.
    ///
    /// Limits mirror the server's own validation (question 10-1000
    /// characters, age at most 150) so a rejected request never leaves the
    /// process.
    pub fn validate(&self) -> Result<()> {
        let len = self.question.chars().count();
        if len < QUESTION_MIN_CHARS {
            return Err(LukmanError::Validation(format!(
                "question must be at least {} characters, got {}",
                QUESTION_MIN_CHARS, len
            )));
        }
        if len > QUESTION_MAX_CHARS {
            return Err(LukmanError::Validation(format!(
                "question must be at most {} characters, got {}",
                QUESTION_MAX_CHARS, len
            )));
        }
        if let Some(age) = self.age {
            if age > AGE_MAX {
                return Err(LukmanError::Validation(format!(
                    "age must be at most {}, got {}",
                    AGE_MAX, age
                )));
            }
        }
        Ok(())
    }
}

/// Advice returned by `POST /advice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalAdvice {
    /// Raw AI-generated advice text (newline-delimited, may carry markdown).
    pub advice: String,
    /// Service-supplied safety disclaimer, displayed after the advice.
    pub disclaimer: String,
}

/// Service status returned by `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub message: String,
    /// Whether the backend's AI model is reachable.
    pub gemini_connected: bool,
}

/// One past query with its stored advice, read-only from the client's side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryHistoryItem {
    pub id: i64,
    pub question: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub advice: String,
    pub ai_model: String,
    /// Naive timestamp; the backend serializes datetimes without a zone.
    pub created_at: NaiveDateTime,
}

/// A page of past queries returned by `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryHistory {
    pub total: u64,
    pub queries: Vec<QueryHistoryItem>,
}
