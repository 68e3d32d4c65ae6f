use maud::{html, Markup};

use crate::domain::{LeadStatus, PaymentMethod};

pub mod error;
pub mod notification;

pub use error::error_page;
pub use notification::{notification_slot, submitted_banner};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h3 class="card-title" { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn status_badge(status: LeadStatus) -> Markup {
    let tone = match status {
        LeadStatus::New => "badge-new",
        LeadStatus::Accepted => "badge-accepted",
        LeadStatus::Declined | LeadStatus::Contacted => "badge-muted",
    };
    html! {
        span class=(format!("badge {tone}")) { (status.as_str()) }
    }
}

pub fn crypto_badge(payment: PaymentMethod) -> Markup {
    html! {
        @if payment == PaymentMethod::Crypto {
            span class="badge badge-crypto" title="Prefers crypto settlement" {
                i class="fa-brands fa-bitcoin" {}
                " Crypto"
            }
        }
    }
}
