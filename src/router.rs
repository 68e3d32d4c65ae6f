use crate::book::LeadBook;
use crate::domain::dispatch::is_pending_settlement;
use crate::domain::{DispatchBoard, IntakeDraft, IntakeFlow, IntakeStep, LeadStatus, ProjectFilter};
use crate::errors::ServerError;
use crate::responses::{html_response, redirect, static_response, ResultResp};
use crate::spreadsheets::export_leads_xlsx;
use crate::templates::components::{notification_slot, submitted_banner};
use crate::templates::pages::{
    dashboard_page, home_page, lead_detail_page, quote_card, verify_control, VerifyState,
};
use astra::Request;
use maud::html;
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Form bodies are a handful of short fields.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, book: &LeadBook) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    debug!(%method, %path, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => {
            let submitted = parse_query(&req).get("submitted").is_some_and(|v| v == "1");
            html_response(home_page(&IntakeFlow::new(), book.new_count(), submitted))
        }

        ("POST", ["quote", "next"]) => {
            let mut flow = IntakeFlow::at(IntakeStep::Project, draft_from(&mut req)?);
            flow.advance();
            render_flow(&req, &flow, book)
        }

        ("POST", ["quote", "back"]) => {
            let mut flow = IntakeFlow::at(IntakeStep::Contact, draft_from(&mut req)?);
            flow.back();
            render_flow(&req, &flow, book)
        }

        ("POST", ["quote"]) => submit_quote(&mut req, book),

        ("GET", ["notifications", "dismiss"]) => html_response(notification_slot()),

        ("GET", ["contractor"]) => {
            let filter = filter_from(&req);
            let leads = book.snapshot();
            html_response(dashboard_page(&DispatchBoard::derive(&leads, filter)))
        }

        ("GET", ["contractor", "export.xlsx"]) => {
            let filter = filter_from(&req);
            let leads = book.snapshot();
            let board = DispatchBoard::derive(&leads, filter);
            export_leads_xlsx(&board.filtered, filter)
        }

        ("GET", ["contractor", "leads", id]) => {
            let lead = book.find(id).ok_or(ServerError::NotFound)?;
            html_response(lead_detail_page(&lead, book.new_count()))
        }

        ("POST", ["contractor", "leads", id, "status"]) => {
            let form = parse_form(&mut req)?;
            let status = form
                .get("status")
                .and_then(|s| LeadStatus::from_label(s))
                .ok_or_else(|| ServerError::BadRequest("unknown lead status".into()))?;

            book.update_status(id, status)?;
            redirect(return_to(form.get("return_to")))
        }

        ("POST", ["contractor", "settlements", id, "verify"]) => {
            settlement_lead(book, id)?;
            html_response(verify_control(id, VerifyState::Checking))
        }

        ("GET", ["contractor", "settlements", id, "verified"]) => {
            settlement_lead(book, id)?;
            html_response(verify_control(id, VerifyState::Verified))
        }

        ("GET", ["static", "main.css"]) => static_response(MAIN_CSS, &mime::TEXT_CSS_UTF_8),

        _ => Err(ServerError::NotFound),
    }
}

fn submit_quote(req: &mut Request, book: &LeadBook) -> ResultResp {
    let draft = draft_from(req)?;
    let flow = IntakeFlow::at(IntakeStep::Contact, draft);

    if let Some(step) = flow.blocking_step() {
        debug!(?step, "quote incomplete, staying on form");
        return render_flow(req, &IntakeFlow::at(step, flow.draft), book);
    }

    book.submit(flow.draft)?;

    if is_htmx(req) {
        html_response(html! {
            (quote_card(&IntakeFlow::new()))
            (submitted_banner(true))
        })
    } else {
        redirect("/?submitted=1")
    }
}

/// htmx gets the swapped card only; a plain form post gets the whole page.
fn render_flow(req: &Request, flow: &IntakeFlow, book: &LeadBook) -> ResultResp {
    if is_htmx(req) {
        html_response(quote_card(flow))
    } else {
        html_response(home_page(flow, book.new_count(), false))
    }
}

/// Settlement checks only make sense for accepted crypto leads.
fn settlement_lead(book: &LeadBook, id: &str) -> Result<(), ServerError> {
    let lead = book.find(id).ok_or(ServerError::NotFound)?;
    if is_pending_settlement(&lead) {
        Ok(())
    } else {
        Err(ServerError::BadRequest("lead has no pending settlement".into()))
    }
}

/// Only contractor pages are valid post-action destinations, and they must
/// fit in a `Location` header.
fn return_to(raw: Option<&String>) -> &str {
    match raw {
        Some(path)
            if (path == "/contractor"
                || path.starts_with("/contractor?")
                || path.starts_with("/contractor/"))
                && !path.chars().any(char::is_control) =>
        {
            path
        }
        _ => "/contractor",
    }
}

fn filter_from(req: &Request) -> ProjectFilter {
    ProjectFilter::parse(parse_query(req).get("type").map(String::as_str))
}

fn draft_from(req: &mut Request) -> Result<IntakeDraft, ServerError> {
    Ok(IntakeDraft::from_form(&parse_form(req)?))
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .is_some_and(|v| v.as_bytes() == b"true")
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn parse_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut raw = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&raw).into_owned().collect())
}
