use crate::domain::DEFAULT_TRADE;
use maud::{html, Markup, DOCTYPE};

/// Which side of the marketplace a page belongs to. Comes from the URL only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    Homeowner,
    Contractor,
}

pub fn desktop_layout(
    title: &str,
    perspective: Perspective,
    new_count: usize,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · PaintFlow" }
                link rel="stylesheet" href="/static/main.css";
                link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body style=(format!("--accent-token: {}", DEFAULT_TRADE.primary_color)) {
                header class="topbar" {
                    a href="/" class="brand" {
                        i class=(format!("fa-solid {}", DEFAULT_TRADE.icon)) {}
                        span { "PAINTFLOW" }
                    }
                    nav class="perspective-toggle" {
                        a.toggle.active[perspective == Perspective::Homeowner] href="/" { "Homeowner" }
                        a.toggle.active[perspective == Perspective::Contractor] href="/contractor" {
                            "Contractor"
                            @if new_count > 0 {
                                span class="badge-dot" title=(format!("{new_count} new leads")) {}
                            }
                        }
                    }
                }

                main class="container" {
                    (content)
                }

                footer class="whitelabel" {
                    span { "White Label for: " strong { (DEFAULT_TRADE.name) } }
                    span class="sep" { "|" }
                    span { "Crypto Payments Enabled" }
                    span class="sep" { "|" }
                    span { "Gemini AI Engine Active" }
                }
            }
        }
    }
}
