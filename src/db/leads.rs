// src/db/leads.rs
//
// The lead list is persisted as one JSON blob. Every mutation rewrites the
// whole list, which is fine at tens to low hundreds of leads and assumes a
// single writer (the `LeadBook`).

use chrono::Utc;
use tracing::{debug, warn};

use crate::db::blobs::{get_blob, put_blob};
use crate::db::connection::Database;
use crate::domain::lead::{Lead, LeadStatus};
use crate::domain::lifecycle::replace_status;
use crate::errors::ServerError;

/// Fixed key the lead list lives under.
pub const LEADS_KEY: &str = "paintflow_leads";

#[derive(Clone, Debug)]
pub struct LeadStore {
    db: Database,
}

impl LeadStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Read the persisted list, newest first.
    ///
    /// A missing blob, a blob that does not parse, or a database that cannot
    /// be read all come back as an empty list.
    pub fn load(&self) -> Vec<Lead> {
        let raw = match self.db.with_conn(|conn| get_blob(conn, LEADS_KEY)) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read stored leads, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Lead>>(&raw) {
            Ok(leads) => leads,
            Err(e) => {
                warn!(error = %e, "stored leads are malformed, starting empty");
                Vec::new()
            }
        }
    }

    /// Serialize the full list and overwrite the stored blob.
    pub fn save(&self, leads: &[Lead]) -> Result<(), ServerError> {
        let json = serde_json::to_string(leads)
            .map_err(|e| ServerError::DbError(format!("serialize leads failed: {e}")))?;

        self.db
            .with_conn(|conn| put_blob(conn, LEADS_KEY, &json, Utc::now().timestamp()))?;

        debug!(count = leads.len(), "saved leads");
        Ok(())
    }

    /// Put `lead` at the front of `leads`, then save.
    /// The in-memory list keeps the new lead even if the write fails.
    pub fn append(&self, leads: &mut Vec<Lead>, lead: Lead) -> Result<(), ServerError> {
        leads.insert(0, lead);
        self.save(leads)
    }

    /// Replace the status of the lead matching `id`, then save.
    /// Returns whether a lead matched; an unknown id changes nothing.
    pub fn update_status(
        &self,
        leads: &mut Vec<Lead>,
        id: &str,
        status: LeadStatus,
    ) -> Result<bool, ServerError> {
        let matched = leads.iter().any(|lead| lead.id == id);
        *leads = replace_status(leads, id, status);
        self.save(leads)?;
        Ok(matched)
    }
}
