//! Client library for the Türkmen Lukmançylyk Maslahat medical advice API.
//!
//! Two pieces do the real work:
//!
//! - [`format`]: turns the AI's raw advice text into an ordered outline of
//!   titled sections (pure, total, never fails).
//! - [`client`]: [`LukmanClient`] over an injected [`Transport`], with an
//!   in-memory TTL response cache for idempotent reads.
//!
//! # Example
//!
//! ```rust,ignore
//! use lukman::{format_advice, LukmanClient, MedicalQuestion, Settings};
//!
//! let client = LukmanClient::new(&Settings::from_env());
//! let advice = client
//!     .get_medical_advice(&MedicalQuestion::new("Kelläm agyrýar, näme etmeli?"))
//!     .await?;
//! for section in format_advice(&advice.advice) {
//!     println!("{}", section.title);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;

pub use client::{HttpTransport, LukmanClient, ResponseCache, Transport};
pub use config::{CacheConfig, Settings};
pub use error::{LukmanError, Result};
pub use format::{format_advice, strip_markdown, AdviceSection, ContentItem};
pub use models::{
    HealthStatus, MedicalAdvice, MedicalQuestion, QueryHistory, QueryHistoryItem,
};
