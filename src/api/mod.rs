pub mod http;
pub mod mock;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::{InternId, InternRecord};

/// The roster backend. Records cross this boundary in storage encoding.
#[async_trait]
pub trait InternApi: Send + Sync {
    /// `GET /interns`
    async fn list(&self) -> Result<Vec<InternRecord>>;

    /// `GET /interns/{id}`
    async fn get(&self, id: &InternId) -> Result<InternRecord>;

    /// `PUT /interns/{id}`. The response body is ignored.
    async fn update(&self, id: &InternId, record: &InternRecord) -> Result<()>;
}
