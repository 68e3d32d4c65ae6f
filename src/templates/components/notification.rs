use maud::{html, Markup};

/// How long the "Lead Submitted!" banner stays up.
pub const NOTIFICATION_MS: u64 = 5000;

pub const NOTIFICATION_ID: &str = "notification";

/// Empty slot the banner swaps into. Dismissing the banner puts this back,
/// so a later submission always has a target.
pub fn notification_slot() -> Markup {
    html! {
        div id=(NOTIFICATION_ID) {}
    }
}

/// Success banner. It schedules its own removal; rendering it again replaces
/// the element and with it the pending timer.
pub fn submitted_banner(out_of_band: bool) -> Markup {
    html! {
        div
            id=(NOTIFICATION_ID)
            class="notification"
            role="status"
            hx-swap-oob=[out_of_band.then_some("true")]
            hx-get="/notifications/dismiss"
            hx-trigger=(format!("load delay:{NOTIFICATION_MS}ms"))
            hx-swap="outerHTML"
        {
            div class="notification-icon" { i class="fa-solid fa-check" {} }
            div {
                div class="notification-title" { "Lead Submitted!" }
                div class="notification-body" { "Contractors are reviewing your project." }
            }
        }
    }
}
