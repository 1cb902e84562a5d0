//! Element geometry.
//!
//! A static page has no rendered boxes, so geometry comes from a `Layout`
//! collaborator. Behaviors only ever ask for these three measurements.

use kuchiki::NodeRef;

use crate::dom::{self, Element};

pub const TOP_HINT: &str = "data-layout-top";
pub const HEIGHT_HINT: &str = "data-layout-height";

pub trait Layout {
    /// Distance in pixels from the top of the document to the element.
    fn offset_top(&self, el: &Element) -> Option<f64>;

    /// Outer height of the element in pixels.
    fn height(&self, el: &Element) -> Option<f64>;

    /// Computed `margin-top` of the element, as the raw CSS value.
    fn margin_top(&self, el: &Element) -> Option<String>;

    /// Removes whatever the layout left in the markup. Called once a page is
    /// done and about to be written out.
    fn clear_hints(&self, _document: &NodeRef) {}
}

/// Reads geometry from markup hints.
///
/// * `data-layout-top="500"` for the document offset,
/// * `data-layout-height="60"` for the height,
/// * `margin-top` inside the inline `style` attribute.
#[derive(Debug, Default, Clone, Copy)]
pub struct AttributeLayout;

impl AttributeLayout {
    fn number(el: &Element, name: &str) -> Option<f64> {
        dom::attr(el, name)?
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

impl Layout for AttributeLayout {
    fn offset_top(&self, el: &Element) -> Option<f64> {
        Self::number(el, TOP_HINT)
    }

    fn height(&self, el: &Element) -> Option<f64> {
        Self::number(el, HEIGHT_HINT)
    }

    fn margin_top(&self, el: &Element) -> Option<String> {
        let style = dom::attr(el, "style")?;
        style.split(';').find_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            prop.trim()
                .eq_ignore_ascii_case("margin-top")
                .then(|| value.trim().to_string())
        })
    }

    fn clear_hints(&self, document: &NodeRef) {
        for el in dom::select_all(document, "[data-layout-top], [data-layout-height]") {
            let mut attrs = el.attributes.borrow_mut();
            attrs.remove(TOP_HINT);
            attrs.remove(HEIGHT_HINT);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink as _;

    #[test]
    fn reads_markup_hints() {
        let doc = kuchiki::parse_html().one(
            r#"<div id="x" data-layout-top=" 120.5" data-layout-height="60" style="color: red; Margin-Top: 20px"></div>"#,
        );
        let el = dom::select_one(&doc, "#x").unwrap();
        let layout = AttributeLayout;
        assert_eq!(layout.offset_top(&el), Some(120.5));
        assert_eq!(layout.height(&el), Some(60.0));
        assert_eq!(layout.margin_top(&el).as_deref(), Some("20px"));
    }

    #[test]
    fn non_finite_hints_are_none() {
        let doc = kuchiki::parse_html()
            .one(r#"<div id="x" data-layout-top="NaN" data-layout-height="inf"></div>"#);
        let el = dom::select_one(&doc, "#x").unwrap();
        assert_eq!(AttributeLayout.offset_top(&el), None);
        assert_eq!(AttributeLayout.height(&el), None);
    }

    #[test]
    fn clear_hints_keeps_other_attributes() {
        let doc = kuchiki::parse_html().one(
            r#"<nav id="top-nav" data-layout-height="60" style="margin-top: 4px"></nav><h2 id="a" data-layout-top="10">A</h2>"#,
        );
        AttributeLayout.clear_hints(&doc);
        let nav = dom::select_one(&doc, "#top-nav").unwrap();
        assert_eq!(dom::attr(&nav, HEIGHT_HINT), None);
        assert_eq!(dom::attr(&nav, "style").as_deref(), Some("margin-top: 4px"));
        let h2 = dom::select_one(&doc, "#a").unwrap();
        assert_eq!(dom::attr(&h2, TOP_HINT), None);
    }

    #[test]
    fn missing_hints_are_none() {
        let doc = kuchiki::parse_html().one(r#"<div id="x" data-layout-top="auto"></div>"#);
        let el = dom::select_one(&doc, "#x").unwrap();
        let layout = AttributeLayout;
        assert_eq!(layout.offset_top(&el), None);
        assert_eq!(layout.height(&el), None);
        assert_eq!(layout.margin_top(&el), None);
    }
}
