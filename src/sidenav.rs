use kuchiki::NodeRef;

use crate::dom;

pub const SIDENAV_LISTS: &str = ".bs-docs-sidenav ul";
pub const SIDENAV_LINKS: &str = ".bs-docs-sidenav a";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cleaned {
    pub lists: usize,
    pub links: usize,
    pub unwrapped: usize,
}

/// Prepares the sidebar navigation for scrollspy: nested lists get the `nav`
/// class, links lose their `<span>` wrappers and carry their text as `title`.
pub fn clean(document: &NodeRef) -> Cleaned {
    let mut cleaned = Cleaned::default();

    for list in dom::select_all(document, SIDENAV_LISTS) {
        dom::add_classes(&list, &["nav"]);
        cleaned.lists += 1;
    }

    for link in dom::select_all(document, SIDENAV_LINKS) {
        let node = link.as_node();
        if let Some(parent) = node.parent().filter(|p| dom::is_tag(p, "span")) {
            dom::unwrap(&parent);
            cleaned.unwrapped += 1;
        }
        dom::set_attr(&link, "title", node.text_contents());
        cleaned.links += 1;
    }

    cleaned
}
