use anyhow::{Context as _, anyhow};
use bytes::Bytes;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use url::Url;

/// HTTP client for the repository metadata endpoint.
///
/// One attempt per request: no retry, no backoff, and no timeout beyond the
/// client defaults.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("build reqwest client")?;
        Ok(Self { client })
    }

    pub async fn get_bytes(&self, url: Url) -> anyhow::Result<Bytes> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("GET {}", url))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("GET {} failed with status {}", url, status));
        }
        resp.bytes().await.context("read response body")
    }
}
