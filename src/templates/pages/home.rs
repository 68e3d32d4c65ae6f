// templates/pages/home.rs

use crate::domain::{IntakeDraft, IntakeFlow, IntakeStep, PaymentMethod, DEFAULT_TRADE};
use crate::templates::components::{notification_slot, submitted_banner};
use crate::templates::{desktop_layout, Perspective};
use maud::{html, Markup};

pub const QUOTE_CARD_ID: &str = "quote-card";

pub fn home_page(flow: &IntakeFlow, new_count: usize, submitted: bool) -> Markup {
    desktop_layout(
        "Get a Quote",
        Perspective::Homeowner,
        new_count,
        html! {
            div class="hero-grid" {
                div class="hero" {
                    h1 {
                        "Quality " (DEFAULT_TRADE.name) "." br;
                        span class="accent" { "Crypto Friendly." }
                    }
                    p class="lead-in" {
                        "Connect with vetted local painting contractors in seconds. "
                        "Pay with standard currency or your favorite crypto assets."
                    }
                    div class="perks" {
                        div class="perk" {
                            div class="perk-icon perk-green" { i class="fa-solid fa-shield-check" {} }
                            div {
                                div class="perk-title" { "Vetted Pros" }
                                div class="perk-sub" { "Verified licenses" }
                            }
                        }
                        div class="perk" {
                            div class="perk-icon perk-amber" { i class="fa-brands fa-ethereum" {} }
                            div {
                                div class="perk-title" { "Crypto Ready" }
                                div class="perk-sub" { "Pay in ETH/BTC" }
                            }
                        }
                    }
                }

                (quote_card(flow))
            }

            @if submitted {
                (submitted_banner(false))
            } @else {
                (notification_slot())
            }
        },
    )
}

/// The two-step quote form. Each step carries the other step's values as
/// hidden inputs so nothing is lost moving between them.
pub fn quote_card(flow: &IntakeFlow) -> Markup {
    let (action, submit_label) = match flow.step {
        IntakeStep::Project => ("/quote/next", "Next Step"),
        IntakeStep::Contact => ("/quote", "Request Free Quote"),
    };

    html! {
        div id=(QUOTE_CARD_ID) class="quote-card" data-step=(step_name(flow.step)) {
            div class="quote-header" {
                h2 { "Get Your Free Quote" }
                p { "Quick, simple, and crypto-friendly." }
            }

            form
                class="quote-form"
                method="post"
                action=(action)
                hx-post=(action)
                hx-target=(format!("#{QUOTE_CARD_ID}"))
                hx-swap="outerHTML"
                hx-disabled-elt="button"
            {
                @match flow.step {
                    IntakeStep::Project => (project_step(&flow.draft)),
                    IntakeStep::Contact => (contact_step(&flow.draft)),
                }

                div class="form-actions" {
                    @if flow.step == IntakeStep::Contact {
                        button
                            type="submit"
                            class="secondary"
                            formaction="/quote/back"
                            formnovalidate
                            hx-post="/quote/back"
                        { "Back" }
                    }
                    button type="submit" class="primary" {
                        span class="btn-text" {
                            (submit_label)
                            @if flow.step == IntakeStep::Project {
                                " " i class="fa-solid fa-arrow-right" {}
                            }
                        }
                        span class="spinner" aria-hidden="true" {
                            i class="fa-solid fa-circle-notch fa-spin" {}
                            " Processing..."
                        }
                    }
                }
            }
        }
    }
}

fn step_name(step: IntakeStep) -> &'static str {
    match step {
        IntakeStep::Project => "project",
        IntakeStep::Contact => "contact",
    }
}

fn project_step(draft: &IntakeDraft) -> Markup {
    html! {
        fieldset class="field" {
            legend { "Project Type" }
            div class="choice-grid" {
                @for t in DEFAULT_TRADE.project_types {
                    label.choice.selected[*t == draft.project_type] {
                        input
                            type="radio"
                            name="project_type"
                            value=(t.as_str())
                            checked[*t == draft.project_type];
                        (t.as_str())
                    }
                }
            }
        }

        div class="field-row" {
            div class="field" {
                label for="zip" { "Zip Code" }
                input type="text" id="zip" name="zip" placeholder="e.g. 90210" value=(draft.zip) required;
            }
            div class="field" {
                label for="size" { "Approx. Size" }
                input type="text" id="size" name="size" placeholder="e.g. 1500 sq ft" value=(draft.size) required;
            }
        }

        div class="field" {
            label for="details" { "Project Details " span class="optional" { "(optional)" } }
            textarea id="details" name="details" rows="3" placeholder="Peeling trim, two stories, HOA colors..." {
                (draft.details)
            }
        }

        input type="hidden" name="name" value=(draft.name);
        input type="hidden" name="email" value=(draft.email);
        input type="hidden" name="phone" value=(draft.phone);
        input type="hidden" name="preferred_payment" value=(draft.preferred_payment.as_str());
    }
}

fn contact_step(draft: &IntakeDraft) -> Markup {
    html! {
        input type="hidden" name="project_type" value=(draft.project_type.as_str());
        input type="hidden" name="zip" value=(draft.zip);
        input type="hidden" name="size" value=(draft.size);
        input type="hidden" name="details" value=(draft.details);

        div class="field" {
            label for="name" { "Contact Name" }
            input type="text" id="name" name="name" value=(draft.name) required;
        }

        div class="field-row" {
            div class="field" {
                label for="email" { "Email" }
                input type="email" id="email" name="email" value=(draft.email) required;
            }
            div class="field" {
                label for="phone" { "Phone" }
                input type="tel" id="phone" name="phone" value=(draft.phone) required;
            }
        }

        fieldset class="field" {
            legend { "Preferred Payment" }
            div class="choice-row" {
                (payment_choice(draft, PaymentMethod::Fiat, "fa-solid fa-credit-card", "Credit/Cash"))
                (payment_choice(draft, PaymentMethod::Crypto, "fa-brands fa-bitcoin", "Crypto"))
            }
        }
    }
}

fn payment_choice(draft: &IntakeDraft, method: PaymentMethod, icon: &str, label: &str) -> Markup {
    let selected = draft.preferred_payment == method;
    html! {
        label.choice.selected[selected] {
            input type="radio" name="preferred_payment" value=(method.as_str()) checked[selected];
            i class=(icon) {}
            " " (label)
        }
    }
}
