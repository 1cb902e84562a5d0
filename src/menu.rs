use kuchiki::NodeRef;

use crate::dom;
use crate::events::{Bindings, ClickHandler, ClickOutcome};

pub const MENU: &str = "#menu";
pub const MENU_LINK: &str = "#menuLink";

/// Binds the side-menu toggle if the page has a toggle control.
pub fn bind(document: &NodeRef, bindings: &mut Bindings) -> bool {
    if !dom::exists(document, MENU_LINK) {
        return false;
    }
    bindings.on_click(MENU_LINK, ClickHandler::MenuToggle);
    true
}

/// Flips the open/closed state of the side menu.
///
/// Applying this twice restores every class list.
pub fn toggle(document: &NodeRef) -> ClickOutcome {
    if let Some(link) = dom::select_one(document, MENU_LINK) {
        dom::toggle_classes(&link, &["active"]);
    }
    if let Some(menu) = dom::select_one(document, MENU) {
        dom::toggle_classes(&menu, &["active"]);
    }
    if let Some(root) = dom::select_one(document, "html") {
        dom::toggle_classes(&root, &["inactive", "no-scroll"]);
    }
    ClickOutcome {
        prevent_default: true,
        scroll: None,
    }
}
