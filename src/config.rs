use std::path::{Path, PathBuf};

use url::Url;

use crate::cli::{Args, ProgressMode};
use crate::features::FeatureFlags;

/// Validated run settings.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub out: Option<PathBuf>,
    pub flags: FeatureFlags,
    pub api_base: Url,
    pub fetch_badges: bool,
    pub user_agent: String,
    pub progress: bool,
}

impl Config {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        use std::io::IsTerminal as _;

        if !args.input.exists() {
            anyhow::bail!("input {} does not exist", args.input.display());
        }
        validate_api_base(&args.api_base)?;

        let progress = match args.progress {
            ProgressMode::Always => true,
            ProgressMode::Never => false,
            ProgressMode::Auto => std::io::stderr().is_terminal(),
        };

        Ok(Self {
            input: args.input.clone(),
            out: args.out.clone(),
            flags: FeatureFlags { svg: !args.no_svg },
            api_base: args.api_base.clone(),
            fetch_badges: !args.offline,
            user_agent: args.user_agent.clone(),
            progress,
        })
    }

    /// Where the enhanced version of `page` is written.
    pub fn output_path(&self, page: &Path) -> PathBuf {
        let Some(out) = &self.out else {
            return page.to_path_buf();
        };
        if self.input.is_file() {
            return out.clone();
        }
        match page.strip_prefix(&self.input) {
            Ok(rel) => out.join(rel),
            Err(_) => out.join(page.file_name().unwrap_or(page.as_os_str())),
        }
    }
}

fn validate_api_base(url: &Url) -> anyhow::Result<()> {
    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!("--api-base must be an http(s) url, got {}", url);
    }
    if url.cannot_be_a_base() {
        anyhow::bail!("--api-base {} cannot carry a path", url);
    }
    Ok(())
}
