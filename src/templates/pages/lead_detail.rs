use crate::domain::logic::lead_score;
use crate::domain::{ContractorAction, Lead, PaymentMethod};
use crate::templates::components::status_badge;
use crate::templates::pages::dashboard::status_button;
use crate::templates::{card, desktop_layout, Perspective};
use chrono::{TimeZone, Utc};
use maud::{html, Markup};

fn submitted_at(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%b %-d, %Y %H:%M UTC").to_string())
        .unwrap_or_default()
}

fn display_name(lead: &Lead) -> &str {
    if lead.name.trim().is_empty() {
        "Anonymous Inquiry"
    } else {
        &lead.name
    }
}

pub fn lead_detail_page(lead: &Lead, new_count: usize) -> Markup {
    desktop_layout(
        display_name(lead),
        Perspective::Contractor,
        new_count,
        html! {
            a class="back-link" href="/contractor" {
                i class="fa-solid fa-arrow-left" {} " Back to Dashboard"
            }

            article class="lead-detail" data-lead-id=(lead.id) {
                header class="detail-header" {
                    div {
                        div class="detail-tags" {
                            span class="tag" { (lead.project_type.as_str()) }
                            (status_badge(lead.status))
                        }
                        h1 { (display_name(lead)) }
                        p class="muted" {
                            i class="fa-solid fa-location-dot" {}
                            " " (lead.zip) " Area • Submitted " (submitted_at(lead.timestamp))
                        }
                    }

                    @let actions = lead.status.offered_actions();
                    @if !actions.is_empty() {
                        div class="detail-actions" {
                            @for action in actions {
                                @let (label, class) = detail_label(*action);
                                (status_button(lead, action.target(), label, class, "/contractor"))
                            }
                        }
                    }
                }

                div class="detail-grid" {
                    div class="detail-main" {
                        (card("Project Overview", project_overview(lead)))
                        (card("Contact Information", contact_info(lead)))

                        @if let Some(summary) = &lead.ai_summary {
                            section class="ai-intel" {
                                div class="ai-intel-title" {
                                    i class="fa-solid fa-wand-magic-sparkles" {} " AI Project Intelligence"
                                }
                                p { "\"" (summary) "\"" }
                            }
                        }
                    }

                    aside class="detail-side" {
                        (card("Payment Preference", payment_preference(lead)))
                        (card("Lead Score", score(lead)))
                    }
                }
            }
        },
    )
}

fn detail_label(action: ContractorAction) -> (&'static str, &'static str) {
    match action {
        ContractorAction::Accept => ("Accept Lead", "accept"),
        ContractorAction::Decline => ("Decline", "pass"),
        ContractorAction::MarkContacted => ("Mark Contacted", "secondary"),
    }
}

fn project_overview(lead: &Lead) -> Markup {
    html! {
        div class="fact-grid" {
            div class="fact" {
                div class="fact-label" { "Scope" }
                div class="fact-value" { (lead.size) }
            }
            div class="fact" {
                div class="fact-label" { "Type" }
                div class="fact-value" { (lead.project_type.as_str()) }
            }
        }
        @if !lead.details.trim().is_empty() {
            p class="details" { (lead.details) }
        }
    }
}

fn contact_info(lead: &Lead) -> Markup {
    html! {
        div class="contact-row" {
            i class="fa-solid fa-phone" {}
            div {
                div class="fact-label" { "Phone Number" }
                strong { (lead.phone) }
            }
            a class="contact-link" href=(format!("tel:{}", lead.phone)) { "Call Now" }
        }
        div class="contact-row" {
            i class="fa-solid fa-envelope" {}
            div {
                div class="fact-label" { "Email Address" }
                strong { (lead.email) }
            }
            a class="contact-link" href=(format!("mailto:{}", lead.email)) { "Message" }
        }
    }
}

fn payment_preference(lead: &Lead) -> Markup {
    html! {
        @match lead.preferred_payment {
            PaymentMethod::Crypto => {
                div class="payment crypto" {
                    i class="fa-brands fa-bitcoin" {} " Cryptocurrency"
                }
                div class="wallet" { "Wallet Hash:" br; code { (lead.wallet_hint()) } }
                p class="muted small" {
                    "This client prefers to settle via on-chain transaction. "
                    "Ensure your wallet is synced before starting."
                }
            }
            PaymentMethod::Fiat => {
                div class="payment fiat" {
                    i class="fa-solid fa-credit-card" {} " Fiat / Standard"
                }
                p class="muted small" {
                    "Client prefers cash, check, or standard credit card processing."
                }
            }
        }
    }
}

fn score(lead: &Lead) -> Markup {
    let score = lead_score(lead);
    html! {
        div class="score" {
            span class="score-value" { (score) }
            span class="muted" { " / 100" }
        }
        div class="score-bar" {
            div class="score-fill" style=(format!("width: {score}%")) {}
        }
        p class="muted small" { "Based on project size, type and payment preference." }
    }
}
