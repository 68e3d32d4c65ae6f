use crate::tests::utils::*;

const JANE: &[(&str, &str)] = &[
    ("project_type", "Exterior"),
    ("zip", "90210"),
    ("size", "2000 sq ft"),
    ("details", "Peeling trim on the north side"),
    ("name", "Jane Doe"),
    ("email", "jane@x.com"),
    ("phone", "555-0100"),
    ("preferred_payment", "Crypto"),
];

#[test]
fn detail_page_shows_the_whole_lead() {
    let book = test_book("detail");
    post_form(&book, "/quote", JANE);
    let id = book.snapshot()[0].id.clone();

    let mut resp = get(&book, &format!("/contractor/leads/{id}"));
    assert_eq!(resp.status(), 200);
    let html = body_string(&mut resp);

    assert_eq!(select_text(&html, ".detail-header h1"), vec!["Jane Doe"]);
    assert!(select_text(&html, ".detail-header p")[0].starts_with("90210 Area • Submitted"));
    assert_eq!(select_text(&html, ".details"), vec!["Peeling trim on the north side"]);
    assert_eq!(
        select_attr(&html, "a.contact-link", "href"),
        vec!["tel:555-0100", "mailto:jane@x.com"]
    );
    assert_eq!(select_text(&html, ".ai-intel p"), vec![format!("\"{STUB_SUMMARY}\"")]);
    assert!(select_text(&html, ".payment")[0].contains("Cryptocurrency"));
    // Exterior, 2000 sq ft, crypto and a summary.
    assert_eq!(select_text(&html, ".score-value"), vec!["85"]);

    assert_eq!(
        select_text(&html, ".detail-actions button"),
        vec!["Accept Lead", "Decline"]
    );
    assert_eq!(
        select_attr(&html, ".detail-actions input[name=return_to]", "value"),
        vec!["/contractor", "/contractor"]
    );
}

#[test]
fn decided_lead_has_no_actions() {
    let book = test_book("detail_decided");
    post_form(&book, "/quote", JANE);
    let id = book.snapshot()[0].id.clone();
    post_form(
        &book,
        &format!("/contractor/leads/{id}/status"),
        &[("status", "Accepted"), ("return_to", "/contractor")],
    );

    let html = body_string(&mut get(&book, &format!("/contractor/leads/{id}")));
    assert!(select_text(&html, ".detail-actions").is_empty());
    assert_eq!(select_text(&html, ".detail-tags .badge"), vec!["Accepted"]);
}

#[test]
fn unknown_lead_is_not_found() {
    let book = test_book("detail_missing");
    let mut resp = get(&book, "/contractor/leads/doesnotexist");
    assert_eq!(resp.status(), 404);
    let html = body_string(&mut resp);
    assert_eq!(select_text(&html, "h1"), vec!["Error 404"]);
}
