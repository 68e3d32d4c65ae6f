// src/domain/logic.rs

use crate::domain::lead::{Lead, PaymentMethod, ProjectType};

/// Size (in the first number found in `size`) above which a job counts as large.
const LARGE_JOB_SQFT: u32 = 2000;

/// Coarse 0-100 desirability score shown on the lead detail page.
///
/// Based on project size and type, payment preference, and whether the lead
/// came with an AI summary. Display only; nothing filters on it.
pub fn lead_score(lead: &Lead) -> u8 {
    let mut score: u32 = 50;

    score += match lead.project_type {
        ProjectType::Commercial => 15,
        ProjectType::Exterior => 10,
        ProjectType::Interior | ProjectType::Cabinets | ProjectType::DeckFence => 0,
    };

    if leading_number(&lead.size).is_some_and(|n| n >= LARGE_JOB_SQFT) {
        score += 10;
    }

    if lead.preferred_payment == PaymentMethod::Crypto {
        score += 10;
    }

    if lead.ai_summary.is_some() {
        score += 5;
    }

    score.min(100) as u8
}

/// First run of digits in free text, ignoring thousands separators.
/// "1,500 sq ft" -> 1500, "3 Bedrooms" -> 3, "big" -> None.
fn leading_number(text: &str) -> Option<u32> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| *c != ',')
        .collect();

    digits.parse().ok()
}
