use std::time::{Duration, Instant};

use indicatif::{HumanDuration, MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::page::{BadgeOutcome, Report};

#[derive(Debug, Default, Clone, Copy)]
struct BadgeCounters {
    applied: u64,
    failed: u64,
    misconfigured: u64,
    skipped: u64,
}

impl BadgeCounters {
    fn inc(&mut self, outcome: BadgeOutcome) {
        let counter = match outcome {
            BadgeOutcome::Applied(_) => &mut self.applied,
            BadgeOutcome::Failed => &mut self.failed,
            BadgeOutcome::Misconfigured => &mut self.misconfigured,
            BadgeOutcome::Skipped | BadgeOutcome::Pending => &mut self.skipped,
            BadgeOutcome::Absent => return,
        };
        *counter += 1;
    }
}

/// Totals for one run, kept whether or not the UI is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub pages: u64,
    pub images_rewritten: u64,
    pub badges_applied: u64,
    pub badges_failed: u64,
}

pub struct Progress {
    enabled: bool,
    start: Instant,

    // UI
    mp: Option<MultiProgress>,
    stage: ProgressBar,
    pages: ProgressBar,

    // Counters
    pages_done: u64,
    images_rewritten: u64,
    badges: BadgeCounters,
}

impl Progress {
    pub fn new(enabled: bool) -> Self {
        let start = Instant::now();

        if !enabled {
            return Self {
                enabled: false,
                start,
                mp: None,
                stage: ProgressBar::hidden(),
                pages: ProgressBar::hidden(),
                pages_done: 0,
                images_rewritten: 0,
                badges: BadgeCounters::default(),
            };
        }

        let mp = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());

        let stage = mp.add(ProgressBar::new_spinner());
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}  [{elapsed_precise}]") {
            stage.set_style(style);
        }
        stage.enable_steady_tick(Duration::from_millis(80));
        stage.set_message("starting");

        let pages = mp.add(ProgressBar::new(0));
        if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}") {
            pages.set_style(style.progress_chars("##-"));
        }
        pages.set_message("pages");

        Self {
            enabled: true,
            start,
            mp: Some(mp),
            stage,
            pages,
            pages_done: 0,
            images_rewritten: 0,
            badges: BadgeCounters::default(),
        }
    }

    pub fn set_stage(&self, msg: impl Into<String>) {
        if !self.enabled {
            return;
        }
        self.stage.set_message(msg.into());
    }

    pub fn set_pages_total(&self, total: usize) {
        if self.enabled {
            self.pages.set_length(total as u64);
        }
    }

    pub fn page_done(&mut self, name: &str, report: &Report) {
        self.pages_done += 1;
        self.images_rewritten += report.images_rewritten as u64;
        self.badges.inc(report.badge);

        if self.enabled {
            self.pages.inc(1);
            self.pages.set_message(name.to_string());
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            pages: self.pages_done,
            images_rewritten: self.images_rewritten,
            badges_applied: self.badges.applied,
            badges_failed: self.badges.failed,
        }
    }

    pub fn finish(&self) {
        tracing::info!(
            pages = self.pages_done,
            images_rewritten = self.images_rewritten,
            badges_applied = self.badges.applied,
            badges_failed = self.badges.failed,
            badges_misconfigured = self.badges.misconfigured,
            badges_skipped = self.badges.skipped,
            "enhancement finished"
        );

        if !self.enabled {
            return;
        }
        self.stage.finish_with_message("done");
        self.pages.finish_and_clear();
        if let Some(mp) = &self.mp {
            // Best effort: ensure the last render flushes.
            let _ = mp.println(format!("Done in {}", HumanDuration(self.start.elapsed())));
        }
    }
}
