//! Small DOM helpers over kuchiki.
//!
//! Every lookup returns an explicit `Option` or a collected `Vec` so callers
//! decide what "absent" means instead of acting on an empty selection.

use kuchiki::iter::NodeIterator as _;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

pub type Element = NodeDataRef<ElementData>;

/// Collects every element matching `selector` under `root`.
///
/// The result is materialized up front so callers may mutate the tree while
/// walking it. An unparsable selector matches nothing.
pub fn select_all(root: &NodeRef, selector: &str) -> Vec<Element> {
    match root.select(selector) {
        Ok(nodes) => nodes.collect(),
        Err(()) => {
            tracing::debug!(selector, "selector did not compile");
            Vec::new()
        }
    }
}

pub fn select_one(root: &NodeRef, selector: &str) -> Option<Element> {
    root.select_first(selector).ok()
}

pub fn exists(root: &NodeRef, selector: &str) -> bool {
    select_one(root, selector).is_some()
}

/// Finds the element whose `id` attribute equals `id` exactly.
///
/// This avoids building a CSS selector from untrusted fragment text.
pub fn find_by_id(root: &NodeRef, id: &str) -> Option<Element> {
    root.descendants()
        .elements()
        .find(|el| el.attributes.borrow().get("id") == Some(id))
}

pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.attributes.borrow().get(name).map(|s| s.to_string())
}

pub fn set_attr(el: &Element, name: &str, value: impl Into<String>) {
    el.attributes.borrow_mut().insert(name, value.into());
}

pub fn classes(el: &Element) -> Vec<String> {
    el.attributes
        .borrow()
        .get("class")
        .unwrap_or("")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.attributes
        .borrow()
        .get("class")
        .is_some_and(|v| v.split_whitespace().any(|c| c == class))
}

fn write_classes(el: &Element, list: &[String]) {
    let mut attrs = el.attributes.borrow_mut();
    if list.is_empty() {
        attrs.remove("class");
    } else {
        attrs.insert("class", list.join(" "));
    }
}

/// Adds each of `names` that is not already present. Returns true if the
/// class list changed.
pub fn add_classes(el: &Element, names: &[&str]) -> bool {
    let mut list = classes(el);
    let before = list.len();
    for name in names {
        if !list.iter().any(|c| c == name) {
            list.push((*name).to_string());
        }
    }
    if list.len() == before {
        return false;
    }
    write_classes(el, &list);
    true
}

/// Flips each class in `names` independently, like jQuery's `toggleClass`.
pub fn toggle_classes(el: &Element, names: &[&str]) {
    let mut list = classes(el);
    for name in names {
        if let Some(pos) = list.iter().position(|c| c == name) {
            list.remove(pos);
        } else {
            list.push((*name).to_string());
        }
    }
    write_classes(el, &list);
}

/// Replaces all children of `el` with a single text node.
pub fn set_text(el: &Element, text: &str) {
    let node = el.as_node();
    for child in node.children().collect::<Vec<_>>() {
        child.detach();
    }
    node.append(NodeRef::new_text(text));
}

pub fn is_tag(node: &NodeRef, tag: &str) -> bool {
    node.as_element()
        .is_some_and(|el| el.name.local.as_ref().eq_ignore_ascii_case(tag))
}

/// Replaces `wrapper` with its children, keeping them at the same position.
pub fn unwrap(wrapper: &NodeRef) {
    for child in wrapper.children().collect::<Vec<_>>() {
        wrapper.insert_before(child);
    }
    wrapper.detach();
}

/// Leading integer of a CSS length, the way `parseInt` reads it.
///
/// `"20px"` gives 20, `"-4.5em"` gives -4, anything without leading digits
/// gives `None`.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let s = value.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink as _;

    fn parse(html: &str) -> NodeRef {
        kuchiki::parse_html().one(html)
    }

    #[test]
    fn add_classes_does_not_duplicate() {
        let doc = parse(r#"<pre class="prettyprint x">a</pre>"#);
        let pre = select_one(&doc, "pre").unwrap();
        assert!(!add_classes(&pre, &["prettyprint"]));
        assert!(add_classes(&pre, &["y"]));
        assert_eq!(classes(&pre), vec!["prettyprint", "x", "y"]);
    }

    #[test]
    fn toggle_removes_attribute_when_empty() {
        let doc = parse(r#"<div id="m" class="active"></div>"#);
        let el = select_one(&doc, "#m").unwrap();
        toggle_classes(&el, &["active"]);
        assert_eq!(attr(&el, "class"), None);
    }

    #[test]
    fn unwrap_keeps_children_in_place() {
        let doc = parse(r#"<li><b>x</b><span><a>one</a> tail</span><i>y</i></li>"#);
        let span = select_one(&doc, "span").unwrap();
        unwrap(span.as_node());
        let li = select_one(&doc, "li").unwrap();
        let mut out = Vec::new();
        li.as_node().serialize(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<li><b>x</b><a>one</a> tail<i>y</i></li>"
        );
    }

    #[test]
    fn parse_int_prefix_matches_parse_int() {
        assert_eq!(parse_int_prefix("20px"), Some(20));
        assert_eq!(parse_int_prefix(" -4.5em"), Some(-4));
        assert_eq!(parse_int_prefix("auto"), None);
        assert_eq!(parse_int_prefix(""), None);
    }

    #[test]
    fn find_by_id_matches_exact_value() {
        let doc = parse(r#"<p id="a.b">x</p><p id="a">y</p>"#);
        assert_eq!(find_by_id(&doc, "a.b").unwrap().as_node().text_contents(), "x");
        assert!(find_by_id(&doc, "missing").is_none());
    }
}
