//! Click bindings registered by the page-ready routine.

use std::time::Duration;

use kuchiki::{NodeRef, Selectors};

use crate::affix::AffixBinding;
use crate::layout::Layout;
use crate::{menu, scroll};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    pub scroll_top: f64,
    pub duration: Duration,
}

/// What the host should do after a click was dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClickOutcome {
    pub prevent_default: bool,
    pub scroll: Option<ScrollAnimation>,
}

impl ClickOutcome {
    pub fn ignored() -> Self {
        Self::default()
    }

    fn merge(self, other: ClickOutcome) -> ClickOutcome {
        ClickOutcome {
            prevent_default: self.prevent_default || other.prevent_default,
            scroll: other.scroll.or(self.scroll),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickHandler {
    MenuToggle,
    HashScroll,
}

struct ClickBinding {
    selector: Selectors,
    handler: ClickHandler,
}

/// Handlers bound for one page.
#[derive(Default)]
pub struct Bindings {
    clicks: Vec<ClickBinding>,
    pub affix: Option<AffixBinding>,
}

impl Bindings {
    pub fn on_click(&mut self, selector: &str, handler: ClickHandler) {
        match Selectors::compile(selector) {
            Ok(selector) => self.clicks.push(ClickBinding { selector, handler }),
            Err(()) => tracing::warn!(selector, "cannot bind click handler"),
        }
    }

    pub fn click_handlers(&self) -> impl Iterator<Item = ClickHandler> + '_ {
        self.clicks.iter().map(|b| b.handler)
    }

    /// Dispatches a click on `target` the way delegated handlers see it:
    /// each binding fires for the nearest ancestor-or-self matching it.
    pub fn dispatch_click(
        &self,
        document: &NodeRef,
        target: &NodeRef,
        layout: &dyn Layout,
    ) -> ClickOutcome {
        let mut outcome = ClickOutcome::ignored();
        for binding in &self.clicks {
            let current = target
                .inclusive_ancestors()
                .filter_map(|n| n.into_element_ref())
                .find(|el| binding.selector.matches(el));
            let Some(current) = current else { continue };

            let result = match binding.handler {
                ClickHandler::MenuToggle => menu::toggle(document),
                ClickHandler::HashScroll => scroll::handle_click(document, &current, layout),
            };
            outcome = outcome.merge(result);
        }
        outcome
    }
}
