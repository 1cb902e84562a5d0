use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProgressMode {
    /// Enable progress UI when stderr is a TTY.
    Auto,
    /// Always enable progress UI (even when piped).
    Always,
    /// Never show progress UI.
    Never,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// An HTML page, or a directory walked recursively for `*.html` / `*.htm`.
    #[arg(long)]
    pub input: PathBuf,

    /// Output path. A file when `--input` is a file, a directory otherwise.
    ///
    /// If omitted, pages are rewritten in place.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// The target renderer cannot draw SVG: point `.svg` images at `.png` twins.
    #[arg(long)]
    pub no_svg: bool,

    /// Base URL of the repository metadata API.
    #[arg(long, default_value = "https://api.github.com")]
    pub api_base: Url,

    /// Do not fetch star/fork counters.
    #[arg(long)]
    pub offline: bool,

    /// HTTP User-Agent used for the repository lookup.
    #[arg(long, default_value = "docs-page-enhance/0.1")]
    pub user_agent: String,

    /// Progress display: `auto`, `always`, or `never`.
    #[arg(long, value_enum, default_value = "auto")]
    pub progress: ProgressMode,
}
