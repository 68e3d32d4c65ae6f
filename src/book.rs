// src/book.rs
//
// `LeadBook` owns the authoritative lead list. Views get snapshots; every
// mutation goes through here, is applied under the lock and written to the
// store before the lock is released.

use chrono::Utc;
use rand::Rng;
use std::sync::{Mutex, MutexGuard};
use tracing::{error, info};

use crate::db::LeadStore;
use crate::domain::{count_new, IntakeDraft, Lead, LeadStatus};
use crate::enrichment::Enrichment;
use crate::errors::ServerError;

const ID_LEN: usize = 9;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Draw a short lowercase base-36 id.
pub fn generate_lead_id<R: Rng>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

pub struct LeadBook {
    leads: Mutex<Vec<Lead>>,
    store: LeadStore,
    enrichment: Enrichment,
}

impl LeadBook {
    /// Load whatever the store holds (possibly nothing) and take ownership.
    pub fn open(store: LeadStore, enrichment: Enrichment) -> Self {
        let leads = store.load();
        info!(count = leads.len(), "loaded leads");
        Self {
            leads: Mutex::new(leads),
            store,
            enrichment,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Lead>> {
        // A panic mid-mutation leaves a list that is still well-formed.
        self.leads.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> Vec<Lead> {
        self.lock().clone()
    }

    pub fn find(&self, id: &str) -> Option<Lead> {
        self.lock().iter().find(|l| l.id == id).cloned()
    }

    pub fn new_count(&self) -> usize {
        count_new(&self.lock())
    }

    /// Enrich, assemble and store a new lead.
    ///
    /// The enrichment call runs before the lock is taken so a slow
    /// collaborator never stalls the contractor views.
    pub fn submit(&self, draft: IntakeDraft) -> Result<Lead, ServerError> {
        let ai_summary = self.enrichment.summarize(&draft.enrichment_request());

        let mut leads = self.lock();
        let id = unused_id(&leads, &mut rand::thread_rng());
        let lead = draft.into_lead(id, Utc::now().timestamp_millis(), Some(ai_summary));

        info!(id = %lead.id, project = lead.project_type.as_str(), "lead submitted");

        self.store
            .append(&mut leads, lead.clone())
            .inspect_err(|e| error!(error = %e, "failed to persist new lead"))?;

        Ok(lead)
    }

    /// Set the status of lead `id`. Unknown ids change nothing and are not an
    /// error; the return value says whether anything matched.
    pub fn update_status(&self, id: &str, status: LeadStatus) -> Result<bool, ServerError> {
        let mut leads = self.lock();
        let matched = self
            .store
            .update_status(&mut leads, id, status)
            .inspect_err(|e| error!(error = %e, "failed to persist status change"))?;

        if matched {
            info!(id, status = status.as_str(), "lead status changed");
        }
        Ok(matched)
    }
}

fn unused_id<R: Rng>(leads: &[Lead], rng: &mut R) -> String {
    loop {
        let id = generate_lead_id(rng);
        if !leads.iter().any(|l| l.id == id) {
            return id;
        }
    }
}
