//! The edit form: load one intern, mutate fields, validate and submit.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, error, info};

use crate::api::InternApi;
use crate::codec::{decode_record, encode_record};
use crate::model::{Field, InternId, InternRecord};
use crate::validation::{FieldErrors, validate};

/// Everything the form holds while editing: the display-encoded record and
/// the error shown next to each field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub record: InternRecord,
    pub errors: FieldErrors,
}

impl FormState {
    pub fn new(record: InternRecord) -> Self {
        Self {
            record,
            errors: FieldErrors::new(),
        }
    }

    /// One line per field: label, value, and the error if there is one.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for field in Field::ALL {
            let value = self.record.get(field);
            let value = if value.is_empty() { "—" } else { value };
            out.push_str(&format!("  {:<17} {}\n", format!("{} *", field.label()), value));
            if let Some(message) = self.errors.get(field) {
                out.push_str(&format!("  {:<17} ✗ {}\n", "", message));
            }
        }
        out
    }
}

/// What a submit attempt ended in.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The record passed validation and the API accepted the update.
    Saved,
    /// Validation failed; nothing was sent.
    Rejected(FieldErrors),
}

/// An edit session for a single intern.
pub struct EditForm {
    api: Arc<dyn InternApi>,
    id: InternId,
    state: FormState,
}

impl EditForm {
    /// Fetch the intern and convert its dates for display.
    pub async fn load(api: Arc<dyn InternApi>, id: InternId) -> Result<Self> {
        let stored = api
            .get(&id)
            .await
            .with_context(|| format!("failed to load intern {id}"))?;
        debug!(%id, "loaded intern");
        Ok(Self {
            api,
            id,
            state: FormState::new(decode_record(stored)),
        })
    }

    pub fn id(&self) -> &InternId {
        &self.id
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn record(&self) -> &InternRecord {
        &self.state.record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    /// Replace one field of the in-memory record. Errors are left as they are
    /// until the next submit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.state.record.set(field, value);
    }

    /// Validate, then send the update. Only a successful update clears the
    /// field errors; a transport failure leaves them and is returned.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let errors = validate(&self.state.record);
        if !errors.is_valid() {
            debug!(id = %self.id, %errors, "submit rejected");
            self.state.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let stored = encode_record(&self.state.record)?;
        if let Err(e) = self.api.update(&self.id, &stored).await {
            error!(id = %self.id, error = %e, "update failed");
            return Err(e.context(format!("failed to update intern {}", self.id)));
        }

        info!(id = %self.id, "intern updated");
        self.state.errors.clear();
        Ok(SubmitOutcome::Saved)
    }

    /// Fetch the intern again, dropping local edits and errors.
    pub async fn reload(&mut self) -> Result<()> {
        let stored = self
            .api
            .get(&self.id)
            .await
            .with_context(|| format!("failed to reload intern {}", self.id))?;
        self.state = FormState::new(decode_record(stored));
        Ok(())
    }
}
