//! Lead enrichment: a short AI summary attached to each lead at submission.
//!
//! Enrichment can never block or fail a submission. Faults and an
//! unconfigured collaborator both collapse into a fixed failure string.

mod enrich_error;
mod gemini;

pub use enrich_error::EnrichError;
pub use gemini::GeminiEnricher;

use tracing::warn;

use crate::domain::lead::ProjectType;

/// Stored when the collaborator faults or none is configured.
pub const SUMMARY_FAILED: &str = "Failed to analyze lead automatically.";
/// Stored when the collaborator answers with no text.
pub const SUMMARY_EMPTY: &str = "No AI analysis available.";

/// Trade context sent to the text-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    pub project_type: ProjectType,
    pub size: String,
    pub zip: String,
    pub details: String,
}

impl EnrichmentRequest {
    pub fn prompt(&self) -> String {
        format!(
            r#"Analyze this painting lead for a contractor. Provide a 2-sentence professional summary and an estimated "Complexity Level" (Low/Medium/High).

Details:
- Project: {}
- Size: {}
- Zip: {}
- Extra Info: {}"#,
            self.project_type.as_str(),
            self.size,
            self.zip,
            self.details
        )
    }
}

pub trait Enricher {
    fn summarize(&self, request: &EnrichmentRequest) -> Result<String, EnrichError>;
}

/// The configured collaborator, if any.
pub enum Enrichment {
    Disabled,
    Enabled(Box<dyn Enricher + Send + Sync>),
}

impl Enrichment {
    /// Summary to store on a new lead. Always displayable.
    pub fn summarize(&self, request: &EnrichmentRequest) -> String {
        match self {
            Enrichment::Disabled => SUMMARY_FAILED.to_string(),
            Enrichment::Enabled(enricher) => enrich_lead(enricher.as_ref(), request),
        }
    }
}

/// Ask `enricher` for a summary, substituting the fixed strings on fault or
/// empty output.
pub fn enrich_lead(enricher: &dyn Enricher, request: &EnrichmentRequest) -> String {
    match enricher.summarize(request) {
        Ok(text) if text.trim().is_empty() => SUMMARY_EMPTY.to_string(),
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "lead enrichment failed");
            SUMMARY_FAILED.to_string()
        }
    }
}
