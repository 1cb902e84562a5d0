use std::time::Duration;

use kuchiki::NodeRef;

use crate::dom::{self, Element};
use crate::events::{Bindings, ClickHandler, ClickOutcome, ScrollAnimation};
use crate::layout::Layout;

/// In-page links, except the one that opens the side menu.
pub const HASH_LINKS: &str = r##"a[href^="#"]:not([href="#menu"])"##;
pub const TOP_NAV: &str = "#top-nav";

/// Gap kept between the fixed header and the scrolled-to element.
pub const HEADER_PADDING: f64 = 15.0;
pub const SCROLL_DURATION: Duration = Duration::from_millis(300);

/// Binds the delegated hash-link handler. Delegation means links added later
/// are covered too, so this always binds.
pub fn bind(bindings: &mut Bindings) {
    bindings.on_click(HASH_LINKS, ClickHandler::HashScroll);
}

/// Fragment of an in-page `href`, without the leading `#`.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|f| !f.is_empty())
}

/// Height of the fixed header, or 0 when the page has none.
pub fn header_height(document: &NodeRef, layout: &dyn Layout) -> f64 {
    dom::select_one(document, TOP_NAV)
        .and_then(|nav| layout.height(&nav))
        .unwrap_or(0.0)
}

/// Scroll position that puts `target` just below the fixed header.
pub fn scroll_target(document: &NodeRef, target: &Element, layout: &dyn Layout) -> Option<f64> {
    let top = layout.offset_top(target)?;
    Some(top - header_height(document, layout) - HEADER_PADDING)
}

pub fn handle_click(document: &NodeRef, link: &Element, layout: &dyn Layout) -> ClickOutcome {
    let href = dom::attr(link, "href").unwrap_or_default();
    let Some(id) = fragment(&href) else {
        return ClickOutcome::ignored();
    };

    let scroll_top = dom::find_by_id(document, id)
        .and_then(|target| scroll_target(document, &target, layout));
    let Some(scroll_top) = scroll_top else {
        tracing::debug!(href, "hash link target not found; leaving default navigation");
        return ClickOutcome::ignored();
    };

    ClickOutcome {
        prevent_default: true,
        scroll: Some(ScrollAnimation {
            scroll_top,
            duration: SCROLL_DURATION,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::AttributeLayout;
    use kuchiki::traits::TendrilSink as _;

    const PAGE: &str = r##"<html><body>
        <nav id="top-nav" data-layout-height="60"></nav>
        <a id="go" href="#section1">go</a>
        <a id="empty" href="#">top</a>
        <a id="lost" href="#nowhere">lost</a>
        <h2 id="section1" data-layout-top="500">Section</h2>
    </body></html>"##;

    #[test]
    fn scrolls_below_fixed_header() {
        let doc = kuchiki::parse_html().one(PAGE);
        let link = dom::select_one(&doc, "#go").unwrap();
        let outcome = handle_click(&doc, &link, &AttributeLayout);
        assert!(outcome.prevent_default);
        assert_eq!(
            outcome.scroll,
            Some(ScrollAnimation {
                scroll_top: 425.0,
                duration: Duration::from_millis(300),
            })
        );
    }

    #[test]
    fn bare_hash_keeps_default() {
        let doc = kuchiki::parse_html().one(PAGE);
        let link = dom::select_one(&doc, "#empty").unwrap();
        assert_eq!(
            handle_click(&doc, &link, &AttributeLayout),
            ClickOutcome::ignored()
        );
    }

    #[test]
    fn missing_target_is_a_no_op() {
        let doc = kuchiki::parse_html().one(PAGE);
        let link = dom::select_one(&doc, "#lost").unwrap();
        assert_eq!(
            handle_click(&doc, &link, &AttributeLayout),
            ClickOutcome::ignored()
        );
    }

    #[test]
    fn header_defaults_to_zero() {
        let doc = kuchiki::parse_html().one(r#"<h2 id="a" data-layout-top="100"></h2>"#);
        let target = dom::select_one(&doc, "#a").unwrap();
        assert_eq!(scroll_target(&doc, &target, &AttributeLayout), Some(85.0));
    }
}
