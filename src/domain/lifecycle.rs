// src/domain/lifecycle.rs
//
// Lead status transitions. The data layer is permissive: any status may follow
// any status. Only the views decide which actions are offered.

use crate::domain::lead::{Lead, LeadStatus};

/// An action a contractor can take on a lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractorAction {
    Accept,
    Decline,
    MarkContacted,
}

impl ContractorAction {
    pub fn target(self) -> LeadStatus {
        match self {
            ContractorAction::Accept => LeadStatus::Accepted,
            ContractorAction::Decline => LeadStatus::Declined,
            ContractorAction::MarkContacted => LeadStatus::Contacted,
        }
    }
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::New,
        LeadStatus::Accepted,
        LeadStatus::Declined,
        LeadStatus::Contacted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Accepted => "Accepted",
            LeadStatus::Declined => "Declined",
            LeadStatus::Contacted => "Contacted",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    /// Actions the UI offers for a lead in this status.
    /// Once a lead has been decided no buttons are shown, even though
    /// `replace_status` would accept any target.
    pub fn offered_actions(self) -> &'static [ContractorAction] {
        match self {
            LeadStatus::New => &[ContractorAction::Accept, ContractorAction::Decline],
            LeadStatus::Accepted | LeadStatus::Declined | LeadStatus::Contacted => &[],
        }
    }
}

/// Copy of `leads` with the status of the lead matching `id` replaced.
/// Every other field and every other lead is left untouched. An unknown id
/// returns an identical list.
pub fn replace_status(leads: &[Lead], id: &str, status: LeadStatus) -> Vec<Lead> {
    leads
        .iter()
        .map(|lead| {
            if lead.id == id {
                Lead {
                    status,
                    ..lead.clone()
                }
            } else {
                lead.clone()
            }
        })
        .collect()
}
