// src/domain/dispatch.rs

use crate::domain::lead::{Lead, LeadStatus, ProjectType};

/// Transient project-type filter on the contractor board. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectType),
}

impl ProjectFilter {
    /// Parse the `type` query value. Anything unrecognised means `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(ProjectType::from_label)
            .map(ProjectFilter::Only)
            .unwrap_or(ProjectFilter::All)
    }

    pub fn matches(self, lead: &Lead) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(t) => lead.project_type == t,
        }
    }

    /// Lowercase noun used in empty-section messages ("" for `All`).
    pub fn noun(self) -> String {
        match self {
            ProjectFilter::All => String::new(),
            ProjectFilter::Only(t) => t.as_str().to_lowercase(),
        }
    }
}

pub fn is_inbox(lead: &Lead) -> bool {
    lead.status == LeadStatus::New
}

pub fn is_active(lead: &Lead) -> bool {
    matches!(lead.status, LeadStatus::Accepted | LeadStatus::Contacted)
}

pub fn is_pending_settlement(lead: &Lead) -> bool {
    lead.status == LeadStatus::Accepted && lead.is_crypto()
}

/// Global count behind the "new leads" badge. Ignores any filter.
pub fn count_new(leads: &[Lead]) -> usize {
    leads.iter().filter(|l| is_inbox(l)).count()
}

/// The three projections rendered on the contractor board.
/// Borrowed views, recomputed per request; the list itself is never touched.
#[derive(Debug)]
pub struct DispatchBoard<'a> {
    pub filter: ProjectFilter,
    pub filtered: Vec<&'a Lead>,
    pub inbox: Vec<&'a Lead>,
    pub active: Vec<&'a Lead>,
    pub pending_settlement: Vec<&'a Lead>,
    pub new_count: usize,
}

impl<'a> DispatchBoard<'a> {
    pub fn derive(leads: &'a [Lead], filter: ProjectFilter) -> Self {
        let filtered: Vec<&Lead> = leads.iter().filter(|l| filter.matches(l)).collect();

        let pick = |keep: fn(&Lead) -> bool| -> Vec<&'a Lead> {
            filtered.iter().copied().filter(|l| keep(l)).collect()
        };
        let inbox = pick(is_inbox);
        let active = pick(is_active);
        let pending_settlement = pick(is_pending_settlement);

        Self {
            filter,
            inbox,
            active,
            pending_settlement,
            new_count: count_new(leads),
            filtered,
        }
    }
}
