// src/domain/trade.rs

use crate::domain::lead::ProjectType;

/// Static white-label descriptor for the deployed trade.
#[derive(Debug)]
pub struct TradeConfig {
    pub name: &'static str,
    pub primary_color: &'static str,
    pub icon: &'static str,
    pub project_types: &'static [ProjectType],
}

pub const DEFAULT_TRADE: TradeConfig = TradeConfig {
    name: "Painting",
    primary_color: "indigo-600",
    icon: "fa-paint-roller",
    project_types: &ProjectType::ALL,
};

impl TradeConfig {
    pub fn offers(&self, project_type: ProjectType) -> bool {
        self.project_types.contains(&project_type)
    }

    /// Project type preselected on a fresh intake form.
    pub fn default_project_type(&self) -> ProjectType {
        self.project_types
            .first()
            .copied()
            .unwrap_or(ProjectType::Interior)
    }
}
