use crate::book::LeadBook;
use crate::db::{init_db, Database, LeadStore};
use crate::enrichment::stub::StubEnricher;
use crate::enrichment::Enrichment;
use crate::router::handle;
use astra::{Body, Response};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

pub const STUB_SUMMARY: &str = "Medium complexity exterior repaint.";

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A fresh sqlite path under the temp dir. Unique per call, even for tests
/// running in parallel.
pub fn temp_db_path(name: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = NEXT_DB.fetch_add(1, Ordering::Relaxed);
    let mut p = std::env::temp_dir();
    p.push(format!("paintflow_{name}_{nanos}_{n}.sqlite"));
    p.to_string_lossy().to_string()
}

/// Lead book on a fresh database with a canned enricher.
pub fn test_book(name: &str) -> LeadBook {
    let db = Database::new(temp_db_path(name));
    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    LeadBook::open(
        LeadStore::new(db),
        Enrichment::Enabled(Box::new(StubEnricher::replying(STUB_SUMMARY))),
    )
}

/// Lead book whose database never had its schema applied, so every save fails.
pub fn unwritable_book(name: &str) -> LeadBook {
    LeadBook::open(
        LeadStore::new(Database::new(temp_db_path(name))),
        Enrichment::Enabled(Box::new(StubEnricher::replying(STUB_SUMMARY))),
    )
}

pub fn get(book: &LeadBook, uri: &str) -> Response {
    let req = http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    handle(req, book).unwrap_or_else(crate::responses::error_to_response)
}

/// POST an urlencoded form the way a browser without htmx would.
pub fn post_form(book: &LeadBook, uri: &str, fields: &[(&str, &str)]) -> Response {
    send_form(book, uri, fields, false)
}

/// POST an urlencoded form the way htmx does (`HX-Request: true`).
pub fn hx_post_form(book: &LeadBook, uri: &str, fields: &[(&str, &str)]) -> Response {
    send_form(book, uri, fields, true)
}

fn send_form(book: &LeadBook, uri: &str, fields: &[(&str, &str)], htmx: bool) -> Response {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    let mut builder = http::Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }

    handle(builder.body(Body::from(body)).unwrap(), book)
        .unwrap_or_else(crate::responses::error_to_response)
}

pub fn body_bytes(resp: &mut Response) -> Vec<u8> {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    bytes
}

pub fn body_string(resp: &mut Response) -> String {
    String::from_utf8(body_bytes(resp)).unwrap()
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Text of every element matching `selector`, whitespace-collapsed.
pub fn select_text(html: &str, selector: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<Vec<_>>().join(" "))
        .map(|t| t.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

/// Value of `attr` on every element matching `selector`.
pub fn select_attr(html: &str, selector: &str, attr: &str) -> Vec<String> {
    let doc = scraper::Html::parse_document(html);
    let sel = scraper::Selector::parse(selector).unwrap();
    doc.select(&sel)
        .filter_map(|el| el.value().attr(attr).map(str::to_string))
        .collect()
}
