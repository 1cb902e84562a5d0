use kuchiki::NodeRef;

use crate::dom::{self, Element};
use crate::layout::Layout;
use crate::scroll;

pub const DOCS_SIDEBAR: &str = ".bs-docs-sidebar";

/// Sticky positioning for the documentation sidebar.
///
/// Holds only the element; the activation offset is recomputed from the
/// layout every time it is asked for.
pub struct AffixBinding {
    sidebar: Element,
}

impl AffixBinding {
    pub fn sidebar(&self) -> &Element {
        &self.sidebar
    }

    /// `top(sidebar) - height(#top-nav) - margin-top(first child)`.
    pub fn offset_top(&self, document: &NodeRef, layout: &dyn Layout) -> Option<f64> {
        let top = layout.offset_top(&self.sidebar)?;
        let header = scroll::header_height(document, layout);
        let margin = first_child_element(&self.sidebar)
            .and_then(|child| layout.margin_top(&child))
            .and_then(|v| dom::parse_int_prefix(&v))
            .unwrap_or(0);
        Some(top - header - margin as f64)
    }
}

fn first_child_element(el: &Element) -> Option<Element> {
    el.as_node()
        .children()
        .find_map(|child| child.into_element_ref())
}

pub fn bind(document: &NodeRef) -> Option<AffixBinding> {
    dom::select_one(document, DOCS_SIDEBAR).map(|sidebar| AffixBinding { sidebar })
}

/// Writes the Bootstrap affix markup contract onto the sidebar so the
/// plugin activates without script configuration.
pub fn annotate(document: &NodeRef, binding: &AffixBinding, layout: &dyn Layout) -> bool {
    let Some(offset) = binding.offset_top(document, layout) else {
        tracing::debug!("sidebar offset unknown; affix left to runtime");
        return false;
    };
    dom::set_attr(&binding.sidebar, "data-spy", "affix");
    dom::set_attr(&binding.sidebar, "data-offset-top", format_px(offset));
    true
}

fn format_px(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
