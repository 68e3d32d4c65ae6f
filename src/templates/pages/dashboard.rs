use crate::domain::{
    ContractorAction, DispatchBoard, Lead, LeadStatus, ProjectFilter, DEFAULT_TRADE,
};
use crate::templates::components::{crypto_badge, status_badge};
use crate::templates::{desktop_layout, Perspective};
use chrono::{TimeZone, Utc};
use maud::{html, Markup};
use url::form_urlencoded::byte_serialize;

/// Delay before a settlement check resolves.
pub const VERIFY_DELAY_MS: u64 = 2000;

pub const VERIFIED_MESSAGE: &str = "Payment verified on-chain! Funds moved to internal wallet.";

/// `/contractor` with the filter applied, for links and post-action redirects.
pub fn board_url(filter: ProjectFilter) -> String {
    match filter {
        ProjectFilter::All => "/contractor".to_string(),
        ProjectFilter::Only(t) => {
            format!("/contractor?type={}", byte_serialize(t.as_str().as_bytes()).collect::<String>())
        }
    }
}

pub fn lead_url(lead: &Lead) -> String {
    format!("/contractor/leads/{}", lead.id)
}

pub fn status_url(lead: &Lead) -> String {
    format!("/contractor/leads/{}/status", lead.id)
}

fn short_date(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

pub fn dashboard_page(board: &DispatchBoard) -> Markup {
    desktop_layout(
        "Contractor Command Center",
        Perspective::Contractor,
        board.new_count,
        html! {
            div class="board-header" {
                div {
                    h2 { "Contractor Command Center" }
                    p class="muted" { "Manage your painting pipeline and crypto earnings" }
                }
                div class="board-stats" {
                    div class="stat" {
                        span class="stat-label" { "New Leads" }
                        span class="stat-value" id="new-count" { (board.new_count) }
                    }
                    a class="button secondary" href=(export_url(board.filter)) {
                        i class="fa-solid fa-file-excel" {} " Export"
                    }
                }
            }

            (filter_bar(board.filter))

            div class="board-columns" {
                section class="inbox" {
                    h3 { i class="fa-solid fa-inbox" {} " Inbox (Pending Review)" }
                    @if board.inbox.is_empty() {
                        p class="empty" { (phrase("No", board.filter, "leads in queue.")) }
                    } @else {
                        @for lead in &board.inbox {
                            (inbox_card(lead, board.filter))
                        }
                    }
                }

                section class="active" {
                    h3 { i class="fa-solid fa-person-digging" {} " In Progress" }
                    @if board.active.is_empty() {
                        p class="empty" { (phrase("No active", board.filter, "projects.")) }
                    } @else {
                        @for lead in &board.active {
                            (active_card(lead))
                        }
                    }
                }
            }

            (settlements(board))
        },
    )
}

/// "No exterior leads in queue." or, unfiltered, "No leads in queue."
fn phrase(before: &str, filter: ProjectFilter, after: &str) -> String {
    match filter {
        ProjectFilter::All => format!("{before} {after}"),
        filter => format!("{before} {} {after}", filter.noun()),
    }
}

fn export_url(filter: ProjectFilter) -> String {
    board_url(filter).replacen("/contractor", "/contractor/export.xlsx", 1)
}

fn filter_bar(current: ProjectFilter) -> Markup {
    html! {
        nav class="filter-bar" {
            span class="filter-label" { i class="fa-solid fa-filter" {} " Filter Projects:" }
            a.chip.active[current == ProjectFilter::All] href=(board_url(ProjectFilter::All)) { "All Types" }
            @for t in DEFAULT_TRADE.project_types {
                @let filter = ProjectFilter::Only(*t);
                a.chip.active[current == filter] href=(board_url(filter)) { (t.as_str()) }
            }
        }
    }
}

fn inbox_card(lead: &Lead, filter: ProjectFilter) -> Markup {
    html! {
        article class="lead-card" data-lead-id=(lead.id) {
            div class="lead-card-head" {
                div {
                    span class="tag" { (lead.project_type.as_str()) }
                    h4 { a href=(lead_url(lead)) { (lead.zip) " Area - " (lead.size) } }
                }
                (crypto_badge(lead.preferred_payment))
            }

            @if let Some(summary) = &lead.ai_summary {
                blockquote class="ai-snippet" { "\"" (summary) "\"" }
            }

            div class="lead-actions" {
                @for action in lead.status.offered_actions() {
                    @let (label, class) = inbox_label(*action);
                    (status_button(lead, action.target(), label, class, &board_url(filter)))
                }
            }
        }
    }
}

fn inbox_label(action: ContractorAction) -> (&'static str, &'static str) {
    match action {
        ContractorAction::Accept => ("Accept", "accept"),
        ContractorAction::Decline => ("Pass", "pass"),
        ContractorAction::MarkContacted => ("Contacted", "secondary"),
    }
}

/// A one-button form that moves `lead` to `target` and comes back to `return_to`.
pub fn status_button(
    lead: &Lead,
    target: LeadStatus,
    label: &str,
    class: &str,
    return_to: &str,
) -> Markup {
    html! {
        form method="post" action=(status_url(lead)) class="inline" {
            input type="hidden" name="status" value=(target.as_str());
            input type="hidden" name="return_to" value=(return_to);
            button type="submit" class=(class) { (label) }
        }
    }
}

fn active_card(lead: &Lead) -> Markup {
    html! {
        article class="lead-card in-progress" data-lead-id=(lead.id) {
            div class="lead-card-head" {
                h4 { a href=(lead_url(lead)) { (lead.name) } }
                span class="muted small" { (short_date(lead.timestamp)) }
            }
            div class="contact-line" {
                i class="fa-solid fa-phone" {} " " (lead.phone)
            }
            div class="contact-line" {
                i class="fa-solid fa-location-dot" {} " " (lead.zip) " • " (lead.project_type.as_str())
                " " (status_badge(lead.status))
            }
            div class="lead-actions" {
                a class="button secondary" href=(format!("tel:{}", lead.phone)) { "Call" }
                a class="button outline" href=(lead_url(lead)) { "Details" }
            }
        }
    }
}

fn settlements(board: &DispatchBoard) -> Markup {
    let scope = match board.filter {
        ProjectFilter::All => "the current".to_string(),
        filter => filter.noun(),
    };

    html! {
        section class="settlements" {
            h3 { i class="fa-brands fa-bitcoin" {} " Crypto Settlements" }
            @if board.pending_settlement.is_empty() {
                p class="empty" { "No pending crypto transactions for " (scope) " selection." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Client" }
                            th { "Generated Wallet (Client Side)" }
                            th { "Asset" }
                            th { "Status" }
                            th { "Action" }
                        }
                    }
                    tbody {
                        @for lead in &board.pending_settlement {
                            tr data-lead-id=(lead.id) {
                                td {
                                    a class="client" href=(lead_url(lead)) { (lead.name) }
                                    div class="muted small" { (lead.project_type.as_str()) }
                                }
                                td { code { (lead.wallet_hint()) } }
                                td class="asset" { "BTC / ETH" }
                                td { span class="badge badge-pending" { "Awaiting Deposit" } }
                                td { (verify_control(&lead.id, VerifyState::Idle)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Presentation-only settlement check. Nothing here touches the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyState {
    Idle,
    Checking,
    Verified,
}

pub fn verify_control(lead_id: &str, state: VerifyState) -> Markup {
    let id = format!("verify-{lead_id}");
    let verify_url = format!("/contractor/settlements/{lead_id}/verify");

    let button = html! {
        button
            type="button"
            class="link"
            hx-post=(verify_url)
            hx-target=(format!("#{id}"))
            hx-swap="outerHTML"
        { "Verify Sync" }
    };

    html! {
        @match state {
            VerifyState::Idle => {
                span id=(id) class="verify" { (button) }
            }
            VerifyState::Checking => {
                span
                    id=(id)
                    class="verify checking"
                    hx-get=(format!("/contractor/settlements/{lead_id}/verified"))
                    hx-trigger=(format!("load delay:{VERIFY_DELAY_MS}ms"))
                    hx-swap="outerHTML"
                {
                    button type="button" class="link" disabled {
                        i class="fa-solid fa-spinner fa-spin" {} " Checking..."
                    }
                }
            }
            VerifyState::Verified => {
                span id=(id) class="verify" {
                    (button)
                    span class="toast" role="status" { (VERIFIED_MESSAGE) }
                }
            }
        }
    }
}
