//! GitHub star and fork counters.

use std::sync::LazyLock;

use kuchiki::NodeRef;
use regex::Regex;
use serde::Deserialize;
use url::Url;

use crate::dom::{self, Element};
use crate::fetcher::Fetcher;

pub const BADGE_CONTAINER: &str = ".gh-btns";
pub const FORK_COUNTER: &str = ".fork-counter";
pub const STAR_COUNTER: &str = ".star-counter";
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

static REPO_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]+$").expect("repo name regex"));

#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error("badge container has no `{0}` attribute")]
    MissingAttribute(&'static str),
    #[error("`{value}` is not a valid GitHub {field} name")]
    InvalidName { field: &'static str, value: String },
    #[error("api base {0} cannot carry a path")]
    Url(Url),
    #[error(transparent)]
    Fetch(#[from] anyhow::Error),
    #[error("decode repository metadata: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoBadgeConfig {
    pub owner: String,
    pub repo: String,
}

impl RepoBadgeConfig {
    pub fn new(owner: &str, repo: &str) -> Result<Self, BadgeError> {
        Ok(Self {
            owner: validate_name("owner", owner)?,
            repo: validate_name("repo", repo)?,
        })
    }

    pub fn from_element(el: &Element) -> Result<Self, BadgeError> {
        let owner =
            dom::attr(el, "data-gh-owner").ok_or(BadgeError::MissingAttribute("data-gh-owner"))?;
        let repo =
            dom::attr(el, "data-gh-repo").ok_or(BadgeError::MissingAttribute("data-gh-repo"))?;
        Self::new(&owner, &repo)
    }

    /// `{api_base}/repos/{owner}/{repo}`
    pub fn request_url(&self, api_base: &Url) -> Result<Url, BadgeError> {
        let mut url = api_base.clone();
        url.path_segments_mut()
            .map_err(|()| BadgeError::Url(api_base.clone()))?
            .pop_if_empty()
            .extend(["repos", self.owner.as_str(), self.repo.as_str()]);
        Ok(url)
    }
}

fn validate_name(field: &'static str, value: &str) -> Result<String, BadgeError> {
    let value = value.trim();
    if !REPO_NAME.is_match(value) || value == "." || value == ".." {
        return Err(BadgeError::InvalidName {
            field,
            value: value.to_string(),
        });
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct RepoStats {
    pub forks_count: u64,
    pub stargazers_count: u64,
}

/// A repository lookup the page asked for but has not performed yet.
#[derive(Debug, Clone)]
pub struct BadgeRequest {
    pub config: RepoBadgeConfig,
    pub url: Url,
}

impl BadgeRequest {
    pub async fn resolve(&self, fetcher: &Fetcher) -> Result<RepoStats, BadgeError> {
        let body = fetcher.get_bytes(self.url.clone()).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Looks for a badge container and turns its attributes into a request.
///
/// `Ok(None)` means the page has no badge; `Err` means it has one that is
/// misconfigured.
pub fn discover(document: &NodeRef, api_base: &Url) -> Result<Option<BadgeRequest>, BadgeError> {
    let Some(container) = dom::select_one(document, BADGE_CONTAINER) else {
        return Ok(None);
    };
    let config = RepoBadgeConfig::from_element(&container)?;
    let url = config.request_url(api_base)?;
    Ok(Some(BadgeRequest { config, url }))
}

pub fn fork_text(stats: &RepoStats) -> String {
    format!(": {}", stats.forks_count)
}

/// Fills whichever counters the page has.
pub fn apply_repo_stats(document: &NodeRef, stats: &RepoStats) {
    for el in dom::select_all(document, FORK_COUNTER) {
        dom::set_text(&el, &fork_text(stats));
    }
    for el in dom::select_all(document, STAR_COUNTER) {
        dom::set_text(&el, &stats.stargazers_count.to_string());
    }
}
