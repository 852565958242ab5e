use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use reqwest::{Response, Url};
use tracing::debug;

use super::InternApi;
use crate::model::{InternId, InternRecord};

/// The roster API over HTTP/JSON.
pub struct HttpInternApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpInternApi {
    /// `base_url` is the server root, e.g. `http://localhost:3001`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("invalid API URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            bail!("API URL cannot hold a path: {base_url}");
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/interns` or `{base}/interns/{id}`, with the id percent-encoded.
    pub fn endpoint(&self, id: Option<&InternId>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("API URL cannot hold a path: {}", self.base_url))?;
            segments.pop_if_empty().push("interns");
            if let Some(id) = id {
                segments.push(&id.to_string());
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl InternApi for HttpInternApi {
    async fn list(&self) -> Result<Vec<InternRecord>> {
        let url = self.endpoint(None)?;
        debug!(%url, "fetching roster");
        let resp = self.client.get(url).send().await?;
        let interns = ensure_success(resp).await?.json().await?;
        Ok(interns)
    }

    async fn get(&self, id: &InternId) -> Result<InternRecord> {
        let url = self.endpoint(Some(id))?;
        debug!(%url, "fetching intern");
        let resp = self.client.get(url).send().await?;
        let intern = ensure_success(resp).await?.json().await?;
        Ok(intern)
    }

    async fn update(&self, id: &InternId, record: &InternRecord) -> Result<()> {
        let url = self.endpoint(Some(id))?;
        debug!(%url, "updating intern");
        let resp = self.client.put(url).json(record).send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}

async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        bail!("interns API error ({}): {}", status, text);
    }
    Ok(resp)
}
