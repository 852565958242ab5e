use std::sync::Mutex;

use anyhow::{Result, anyhow, bail};
use async_trait::async_trait;

use super::InternApi;
use crate::model::{InternId, InternRecord};

/// An in-memory roster for tests. Records every update it receives.
pub struct MockInternApi {
    records: Mutex<Vec<InternRecord>>,
    updates: Mutex<Vec<InternRecord>>,
    fail_with: Option<String>,
}

impl MockInternApi {
    pub fn new(records: Vec<InternRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            updates: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A backend that answers every call with the given error.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new(Vec::new())
        }
    }

    /// Bodies of all update calls, oldest first.
    pub fn updates(&self) -> Result<Vec<InternRecord>> {
        Ok(self
            .updates
            .lock()
            .map_err(|_| anyhow!("MockInternApi: lock poisoned"))?
            .clone())
    }

    fn check_failure(&self) -> Result<()> {
        match &self.fail_with {
            Some(message) => bail!("{message}"),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl InternApi for MockInternApi {
    async fn list(&self) -> Result<Vec<InternRecord>> {
        self.check_failure()?;
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow!("MockInternApi: lock poisoned"))?;
        Ok(records.clone())
    }

    async fn get(&self, id: &InternId) -> Result<InternRecord> {
        self.check_failure()?;
        let records = self
            .records
            .lock()
            .map_err(|_| anyhow!("MockInternApi: lock poisoned"))?;
        records
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("interns API error (404 Not Found): no intern {id}"))
    }

    async fn update(&self, id: &InternId, record: &InternRecord) -> Result<()> {
        self.check_failure()?;
        let mut records = self
            .records
            .lock()
            .map_err(|_| anyhow!("MockInternApi: lock poisoned"))?;
        let slot = records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| anyhow!("interns API error (404 Not Found): no intern {id}"))?;
        *slot = record.clone();
        self.updates
            .lock()
            .map_err(|_| anyhow!("MockInternApi: lock poisoned"))?
            .push(record.clone());
        Ok(())
    }
}
