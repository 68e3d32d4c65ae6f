// src/domain/lead.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    Interior,
    Exterior,
    Cabinets,
    Commercial,
    #[serde(rename = "Deck/Fence")]
    DeckFence,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Interior,
        ProjectType::Exterior,
        ProjectType::Cabinets,
        ProjectType::Commercial,
        ProjectType::DeckFence,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Interior => "Interior",
            ProjectType::Exterior => "Exterior",
            ProjectType::Cabinets => "Cabinets",
            ProjectType::Commercial => "Commercial",
            ProjectType::DeckFence => "Deck/Fence",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Fiat,
    Crypto,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Fiat => "Fiat",
            PaymentMethod::Crypto => "Crypto",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Fiat" => Some(PaymentMethod::Fiat),
            "Crypto" => Some(PaymentMethod::Crypto),
            _ => None,
        }
    }
}

/// Where a lead sits in the contractor pipeline. See `domain::lifecycle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LeadStatus {
    #[default]
    New,
    Accepted,
    Declined,
    Contacted,
}

/// One submitted service request.
///
/// Field names serialize exactly as they are stored in the persisted lead list
/// (`projectType`, `aiSummary`, ...). Everything except `status` is fixed once
/// the intake flow has assembled the lead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    pub zip: String,
    /// Free text, e.g. "1500 sq ft" or "3 Bedrooms".
    pub size: String,
    pub project_type: ProjectType,
    #[serde(default)]
    pub details: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: LeadStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    pub preferred_payment: PaymentMethod,
}

impl Lead {
    pub fn is_crypto(&self) -> bool {
        self.preferred_payment == PaymentMethod::Crypto
    }

    /// Placeholder deposit address shown next to crypto settlements.
    /// Purely cosmetic; nothing is checked against a chain.
    pub fn wallet_hint(&self) -> String {
        let prefix: String = self.id.chars().take(4).collect();
        format!("0x71C7...{prefix}...E3d2")
    }
}
