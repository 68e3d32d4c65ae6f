use crate::domain::{Lead, ProjectFilter};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use chrono::{TimeZone, Utc};
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 11] = [
    "Submitted (UTC)",
    "Lead ID",
    "Name",
    "Email",
    "Phone",
    "Zip",
    "Size",
    "Project Type",
    "Payment",
    "Status",
    "AI Summary",
];

fn submitted_at(timestamp_ms: i64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

/// Workbook bytes with a header row and one row per lead.
pub fn leads_workbook(leads: &[&Lead]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, lead) in leads.iter().enumerate() {
        let r = (i + 1) as u32;

        let cells = [
            submitted_at(lead.timestamp),
            lead.id.clone(),
            lead.name.clone(),
            lead.email.clone(),
            lead.phone.clone(),
            lead.zip.clone(),
            lead.size.clone(),
            lead.project_type.as_str().to_string(),
            lead.preferred_payment.as_str().to_string(),
            lead.status.as_str().to_string(),
            lead.ai_summary.clone().unwrap_or_default(),
        ];

        for (col, value) in cells.iter().enumerate() {
            worksheet.write_string(r, col as u16, value).map_err(|e| {
                ServerError::XlsxError(format!("Failed to write {}: {}", HEADERS[col], e))
            })?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}

pub fn export_leads_xlsx(leads: &[&Lead], filter: ProjectFilter) -> ResultResp {
    let buffer = leads_workbook(leads)?;

    let scope = match filter {
        ProjectFilter::All => "all".to_string(),
        ProjectFilter::Only(t) => t.as_str().to_lowercase().replace('/', "-"),
    };

    xlsx_response(buffer, &format!("leads_{scope}.xlsx"))
}
