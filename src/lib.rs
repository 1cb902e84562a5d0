mod affix;
mod badge;
mod classing;
mod cli;
mod config;
pub mod dom;
mod events;
mod features;
mod fetcher;
mod images;
mod layout;
mod menu;
mod page;
mod progress;
mod scroll;
mod sidenav;
mod toc;
mod year;

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use async_recursion::async_recursion;

pub use affix::AffixBinding;
pub use badge::{BadgeError, BadgeRequest, RepoBadgeConfig, RepoStats, apply_repo_stats};
pub use classing::Classed;
pub use cli::{Args as CliArgs, ProgressMode};
pub use config::Config;
pub use events::{Bindings, ClickHandler, ClickOutcome, ScrollAnimation};
pub use features::FeatureFlags;
pub use fetcher::Fetcher;
pub use layout::{AttributeLayout, Layout};
pub use page::{
    BadgeOutcome, Enhancement, PageContext, Report, complete_badge, enhance_html, parse,
    run as enhance_document, serialize,
};
pub use progress::Summary;
pub use sidenav::Cleaned;

/// Runs the page-ready routine over every page under `--input`.
pub async fn run(args: CliArgs) -> anyhow::Result<Summary> {
    let config = Config::from_args(&args)?;
    let mut progress = progress::Progress::new(config.progress);
    progress.set_stage("collecting pages");

    let pages = if config.input.is_file() {
        vec![config.input.clone()]
    } else {
        let mut pages = Vec::new();
        collect_pages(&config.input, &mut pages).await?;
        pages.sort();
        pages
    };
    progress.set_pages_total(pages.len());
    tracing::info!(count = pages.len(), input = %config.input.display(), "enhancing pages");

    let fetcher = if config.fetch_badges {
        Some(Fetcher::new(&config.user_agent)?)
    } else {
        None
    };
    let layout = AttributeLayout;
    let ctx = PageContext {
        flags: config.flags,
        layout: &layout,
        year: year::current_year(),
        api_base: &config.api_base,
    };

    progress.set_stage("enhancing");
    for page in &pages {
        let html = tokio::fs::read_to_string(page)
            .await
            .with_context(|| format!("read {}", page.display()))?;
        let (out, report) = enhance_html(&html, &ctx, fetcher.as_ref())
            .await
            .with_context(|| format!("enhance {}", page.display()))?;

        let out_path = config.output_path(page);
        if let Some(parent) = out_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }
        tokio::fs::write(&out_path, out)
            .await
            .with_context(|| format!("write {}", out_path.display()))?;

        progress.page_done(&page.display().to_string(), &report);
    }

    progress.finish();
    Ok(progress.summary())
}

#[async_recursion]
async fn collect_pages(dir: &Path, pages: &mut Vec<PathBuf>) -> anyhow::Result<()> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("read dir {}", dir.display()))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("read dir {}", dir.display()))?
    {
        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("stat {}", path.display()))?;
        if file_type.is_dir() {
            collect_pages(&path, pages).await?;
        } else if is_page(&path) {
            pages.push(path);
        }
    }
    Ok(())
}

fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"))
}
