use chrono::Datelike as _;
use kuchiki::NodeRef;

use crate::dom;

pub const CURRENT_YEAR: &str = ".current-year";

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Writes `year` into every footer year slot. Returns false when the page
/// has none.
pub fn stamp_year(document: &NodeRef, year: i32) -> bool {
    let slots = dom::select_all(document, CURRENT_YEAR);
    let text = year.to_string();
    for slot in &slots {
        dom::set_text(slot, &text);
    }
    !slots.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink as _;

    #[test]
    fn stamps_year_text() {
        let doc =
            kuchiki::parse_html().one(r#"<footer>&copy; <span class="current-year">2015</span></footer>"#);
        assert!(stamp_year(&doc, 2024));
        let slot = dom::select_one(&doc, CURRENT_YEAR).unwrap();
        assert_eq!(slot.as_node().text_contents(), "2024");
    }

    #[test]
    fn clock_year_is_four_digits() {
        let doc = kuchiki::parse_html().one(r#"<span class="current-year"></span>"#);
        let year = current_year();
        stamp_year(&doc, year);
        let text = dom::select_one(&doc, CURRENT_YEAR)
            .unwrap()
            .as_node()
            .text_contents();
        assert_eq!(text.len(), 4);
        assert_eq!(text, year.to_string());
    }

    #[test]
    fn absent_slot_is_skipped() {
        let doc = kuchiki::parse_html().one("<footer></footer>");
        assert!(!stamp_year(&doc, 2024));
    }
}
