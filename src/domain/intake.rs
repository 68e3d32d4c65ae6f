// src/domain/intake.rs

use std::collections::HashMap;

use crate::domain::lead::{Lead, LeadStatus, PaymentMethod, ProjectType};
use crate::domain::trade::DEFAULT_TRADE;
use crate::enrichment::EnrichmentRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeStep {
    /// Project type, zip, size and optional details.
    Project,
    /// Name, email, phone and payment preference.
    Contact,
}

/// Everything the homeowner has typed so far. Both steps carry the full draft
/// so navigating back and forth never drops a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeDraft {
    pub project_type: ProjectType,
    pub zip: String,
    pub size: String,
    pub details: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_payment: PaymentMethod,
}

impl Default for IntakeDraft {
    fn default() -> Self {
        Self {
            project_type: DEFAULT_TRADE.default_project_type(),
            zip: String::new(),
            size: String::new(),
            details: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            preferred_payment: PaymentMethod::Fiat,
        }
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

impl IntakeDraft {
    /// Build a draft from posted form fields. Missing fields stay empty; an
    /// unknown project type or payment keeps the default.
    pub fn from_form(form: &HashMap<String, String>) -> Self {
        let text = |key: &str| form.get(key).cloned().unwrap_or_default();
        let defaults = Self::default();

        let project_type = form
            .get("project_type")
            .and_then(|v| ProjectType::from_label(v))
            .filter(|t| DEFAULT_TRADE.offers(*t))
            .unwrap_or(defaults.project_type);

        let preferred_payment = form
            .get("preferred_payment")
            .and_then(|v| PaymentMethod::from_label(v))
            .unwrap_or(defaults.preferred_payment);

        Self {
            project_type,
            zip: text("zip"),
            size: text("size"),
            details: text("details"),
            name: text("name"),
            email: text("email"),
            phone: text("phone"),
            preferred_payment,
        }
    }

    pub fn can_advance(&self) -> bool {
        present(&self.zip) && present(&self.size)
    }

    pub fn can_submit(&self) -> bool {
        present(&self.name) && present(&self.email) && present(&self.phone)
    }

    pub fn enrichment_request(&self) -> EnrichmentRequest {
        EnrichmentRequest {
            project_type: self.project_type,
            size: self.size.clone(),
            zip: self.zip.clone(),
            details: self.details.clone(),
        }
    }

    /// Finalize into a `New` lead.
    pub fn into_lead(self, id: String, timestamp: i64, ai_summary: Option<String>) -> Lead {
        Lead {
            id,
            timestamp,
            zip: self.zip,
            size: self.size,
            project_type: self.project_type,
            details: self.details,
            name: self.name,
            email: self.email,
            phone: self.phone,
            status: LeadStatus::New,
            ai_summary,
            preferred_payment: self.preferred_payment,
        }
    }
}

/// The two-step quote form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeFlow {
    pub step: IntakeStep,
    pub draft: IntakeDraft,
}

impl IntakeFlow {
    pub fn new() -> Self {
        Self::at(IntakeStep::Project, IntakeDraft::default())
    }

    pub fn at(step: IntakeStep, draft: IntakeDraft) -> Self {
        Self { step, draft }
    }

    /// Move to the contact step. Stays put (and returns false) while zip or
    /// size is blank.
    pub fn advance(&mut self) -> bool {
        if self.step == IntakeStep::Project && self.draft.can_advance() {
            self.step = IntakeStep::Contact;
            true
        } else {
            false
        }
    }

    pub fn back(&mut self) {
        self.step = IntakeStep::Project;
    }

    /// Where a submission attempt with this draft should land. `None` means
    /// the draft is complete and can be submitted.
    pub fn blocking_step(&self) -> Option<IntakeStep> {
        if !self.draft.can_advance() {
            Some(IntakeStep::Project)
        } else if !self.draft.can_submit() {
            Some(IntakeStep::Contact)
        } else {
            None
        }
    }
}

impl Default for IntakeFlow {
    fn default() -> Self {
        Self::new()
    }
}
