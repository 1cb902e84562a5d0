//! The page-ready routine.
//!
//! Runs every behavior once over a parsed document. Synchronous behaviors all
//! finish before the repository lookup is awaited, and the lookup only ever
//! touches the two counter elements.

use anyhow::Context as _;
use kuchiki::NodeRef;
use kuchiki::traits::TendrilSink as _;
use url::Url;

use crate::badge::{self, BadgeRequest, RepoStats};
use crate::classing::{self, Classed};
use crate::events::Bindings;
use crate::features::FeatureFlags;
use crate::fetcher::Fetcher;
use crate::layout::Layout;
use crate::sidenav::{self, Cleaned};
use crate::{affix, images, menu, scroll, toc, year};

pub struct PageContext<'a> {
    pub flags: FeatureFlags,
    pub layout: &'a dyn Layout,
    pub year: i32,
    pub api_base: &'a Url,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeOutcome {
    #[default]
    Absent,
    Misconfigured,
    Pending,
    Skipped,
    Applied(RepoStats),
    Failed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    pub menu_bound: bool,
    pub images_rewritten: usize,
    pub badge: BadgeOutcome,
    pub year_stamped: bool,
    pub affixed: bool,
    pub classed: Classed,
    pub toc_ids: usize,
    pub sidenav: Cleaned,
}

pub struct Enhancement {
    pub bindings: Bindings,
    pub report: Report,
    pub badge: Option<BadgeRequest>,
}

/// Runs the synchronous part of the routine.
///
/// The repository lookup is returned as a pending request instead of being
/// performed, so the caller decides whether and when to await it.
pub fn run(document: &NodeRef, ctx: &PageContext<'_>) -> Enhancement {
    let mut bindings = Bindings::default();
    let mut report = Report::default();

    report.menu_bound = menu::bind(document, &mut bindings);
    report.images_rewritten = images::fallback_to_raster(document, ctx.flags);

    let badge = match badge::discover(document, ctx.api_base) {
        Ok(Some(request)) => {
            report.badge = BadgeOutcome::Pending;
            Some(request)
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(error = %e, "skipping repository badge");
            report.badge = BadgeOutcome::Misconfigured;
            None
        }
    };

    report.year_stamped = year::stamp_year(document, ctx.year);

    if let Some(binding) = affix::bind(document) {
        report.affixed = affix::annotate(document, &binding, ctx.layout);
        bindings.affix = Some(binding);
    }

    scroll::bind(&mut bindings);
    report.classed = classing::apply(document);
    report.toc_ids = toc::copy_names_to_ids(document);
    report.sidenav = sidenav::clean(document);

    tracing::debug!(?report, "page behaviors applied");
    Enhancement {
        bindings,
        report,
        badge,
    }
}

/// Performs the pending repository lookup, if any, and fills the counters.
///
/// Failures are logged and leave the page as it was.
pub async fn complete_badge(
    document: &NodeRef,
    enhancement: &mut Enhancement,
    fetcher: Option<&Fetcher>,
) {
    let Some(request) = enhancement.badge.take() else {
        return;
    };
    let Some(fetcher) = fetcher else {
        enhancement.report.badge = BadgeOutcome::Skipped;
        return;
    };

    match request.resolve(fetcher).await {
        Ok(stats) => {
            badge::apply_repo_stats(document, &stats);
            tracing::debug!(
                owner = %request.config.owner,
                repo = %request.config.repo,
                forks = stats.forks_count,
                stars = stats.stargazers_count,
                "repository counters filled"
            );
            enhancement.report.badge = BadgeOutcome::Applied(stats);
        }
        Err(e) => {
            tracing::warn!(url = %request.url, error = %e, "repository lookup failed");
            enhancement.report.badge = BadgeOutcome::Failed;
        }
    }
}

pub fn parse(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

pub fn serialize(document: &NodeRef) -> anyhow::Result<String> {
    let mut out = Vec::new();
    document.serialize(&mut out).context("serialize page")?;
    String::from_utf8(out).context("page html not utf-8")
}

/// Parses, enhances and serializes one page. Layout hints are cleared
/// before serializing.
pub async fn enhance_html(
    html: &str,
    ctx: &PageContext<'_>,
    fetcher: Option<&Fetcher>,
) -> anyhow::Result<(String, Report)> {
    let document = parse(html);
    let mut enhancement = run(&document, ctx);
    complete_badge(&document, &mut enhancement, fetcher).await;
    ctx.layout.clear_hints(&document);
    Ok((serialize(&document)?, enhancement.report))
}
