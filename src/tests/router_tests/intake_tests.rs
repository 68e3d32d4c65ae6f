// src/tests/router_tests/intake_tests.rs

use crate::domain::{LeadStatus, PaymentMethod, ProjectType};
use crate::tests::utils::*;

const JANE: &[(&str, &str)] = &[
    ("project_type", "Exterior"),
    ("zip", "90210"),
    ("size", "2000 sq ft"),
    ("details", ""),
    ("name", "Jane Doe"),
    ("email", "jane@x.com"),
    ("phone", "555-0100"),
    ("preferred_payment", "Crypto"),
];

#[test]
fn home_starts_on_project_step() {
    let book = test_book("home_start");
    let mut resp = get(&book, "/");
    assert_eq!(resp.status(), 200);

    let html = body_string(&mut resp);
    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["project"]);
    assert_eq!(
        select_attr(&html, "input[name=project_type][checked]", "value"),
        vec!["Interior"]
    );
    assert!(select_text(&html, "#notification").iter().all(|t| t.is_empty()));
}

#[test]
fn next_requires_zip_and_size() {
    let book = test_book("next_blank");
    let mut resp = hx_post_form(
        &book,
        "/quote/next",
        &[("project_type", "Cabinets"), ("zip", ""), ("size", "12 doors")],
    );
    let html = body_string(&mut resp);

    assert!(!html.contains("<!DOCTYPE html>"));
    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["project"]);
    assert_eq!(select_attr(&html, "input[name=size]", "value"), vec!["12 doors"]);
    assert_eq!(
        select_attr(&html, "input[name=project_type][checked]", "value"),
        vec!["Cabinets"]
    );
}

#[test]
fn next_moves_to_contact_step_carrying_project_fields() {
    let book = test_book("next_ok");
    let mut resp = hx_post_form(
        &book,
        "/quote/next",
        &[("project_type", "Exterior"), ("zip", "90210"), ("size", "2000 sq ft")],
    );
    let html = body_string(&mut resp);

    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["contact"]);
    assert_eq!(select_attr(&html, "input[type=hidden][name=zip]", "value"), vec!["90210"]);
    assert_eq!(
        select_attr(&html, "input[type=hidden][name=project_type]", "value"),
        vec!["Exterior"]
    );
    assert_eq!(
        select_attr(&html, "input[name=preferred_payment][checked]", "value"),
        vec!["Fiat"]
    );
}

#[test]
fn back_keeps_contact_fields() {
    let book = test_book("back");
    let mut resp = hx_post_form(&book, "/quote/back", JANE);
    let html = body_string(&mut resp);

    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["project"]);
    assert_eq!(select_attr(&html, "input[type=hidden][name=name]", "value"), vec!["Jane Doe"]);
    assert_eq!(select_attr(&html, "input[name=zip]", "value"), vec!["90210"]);
}

#[test]
fn plain_form_posts_get_full_pages() {
    let book = test_book("plain_next");
    let mut resp = post_form(
        &book,
        "/quote/next",
        &[("zip", "90210"), ("size", "2000 sq ft")],
    );
    let html = body_string(&mut resp);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["contact"]);
}

#[test]
fn submitting_creates_an_enriched_new_lead() {
    let book = test_book("submit_htmx");
    let mut resp = hx_post_form(&book, "/quote", JANE);
    assert_eq!(resp.status(), 200);
    let html = body_string(&mut resp);

    // Form resets to a blank first step; the banner rides along out of band.
    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["project"]);
    assert_eq!(select_attr(&html, "input[name=zip]", "value"), vec![""]);
    assert_eq!(select_attr(&html, "#notification", "hx-swap-oob"), vec!["true"]);
    assert!(select_text(&html, "#notification")[0].contains("Lead Submitted!"));

    let leads = book.snapshot();
    assert_eq!(leads.len(), 1);
    let lead = &leads[0];
    assert_eq!(lead.project_type, ProjectType::Exterior);
    assert_eq!(lead.zip, "90210");
    assert_eq!(lead.name, "Jane Doe");
    assert_eq!(lead.preferred_payment, PaymentMethod::Crypto);
    assert_eq!(lead.status, LeadStatus::New);
    assert_eq!(lead.ai_summary.as_deref(), Some(STUB_SUMMARY));

    let mut board = get(&book, "/contractor");
    let html = body_string(&mut board);
    assert_eq!(
        select_text(&html, "section.inbox article h4"),
        vec!["90210 Area - 2000 sq ft"]
    );
    assert_eq!(select_text(&html, "#new-count"), vec!["1"]);
}

#[test]
fn plain_submit_redirects_to_banner() {
    let book = test_book("submit_plain");
    let resp = post_form(&book, "/quote", JANE);
    assert_eq!(resp.status(), 303);
    assert_eq!(location(&resp), "/?submitted=1");

    let mut home = get(&book, "/?submitted=1");
    let html = body_string(&mut home);
    assert!(select_text(&html, "#notification")[0].contains("Lead Submitted!"));
    assert_eq!(select_attr(&html, "#notification", "hx-swap-oob"), Vec::<String>::new());
}

#[test]
fn incomplete_submit_stores_nothing() {
    let book = test_book("submit_incomplete");

    let missing_phone: Vec<(&str, &str)> = JANE
        .iter()
        .map(|&(k, v)| if k == "phone" { (k, " ") } else { (k, v) })
        .collect();
    let mut resp = hx_post_form(&book, "/quote", &missing_phone);
    let html = body_string(&mut resp);
    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["contact"]);
    assert_eq!(select_attr(&html, "input[name=name]", "value"), vec!["Jane Doe"]);

    let missing_zip: Vec<(&str, &str)> = JANE.iter().copied().filter(|&(k, _)| k != "zip").collect();
    let mut resp = hx_post_form(&book, "/quote", &missing_zip);
    let html = body_string(&mut resp);
    assert_eq!(select_attr(&html, "#quote-card", "data-step"), vec!["project"]);

    assert!(book.snapshot().is_empty());
}

#[test]
fn failed_save_answers_500_but_keeps_the_lead() {
    let book = unwritable_book("submit_unwritable");

    let mut resp = post_form(&book, "/quote", JANE);
    assert_eq!(resp.status(), 500);
    let html = body_string(&mut resp);
    assert_eq!(select_text(&html, "h1"), vec!["Error 500"]);

    let leads = book.snapshot();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].name, "Jane Doe");
    assert_eq!(leads[0].status, LeadStatus::New);
}

#[test]
fn banner_dismissal_restores_empty_slot() {
    let book = test_book("dismiss");
    let mut resp = get(&book, "/notifications/dismiss");
    assert_eq!(resp.status(), 200);
    assert_eq!(body_string(&mut resp), r#"<div id="notification"></div>"#);
}

#[test]
fn nav_badge_follows_new_leads() {
    let book = test_book("badge");
    let html = body_string(&mut get(&book, "/"));
    assert!(select_attr(&html, ".badge-dot", "class").is_empty());

    hx_post_form(&book, "/quote", JANE);
    let html = body_string(&mut get(&book, "/"));
    assert_eq!(select_attr(&html, ".badge-dot", "class").len(), 1);
}
