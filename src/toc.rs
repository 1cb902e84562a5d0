use kuchiki::NodeRef;

use crate::dom;

pub const DOCBOOK: &str = ".docbook";
pub const TOC_TARGETS: &str =
    ".docbook h1 > a, .docbook h2 > a, .docbook h3 > a, .docbook .container-fluid";

/// DocBook output marks anchors with `name`; copy it into `id` so fragment
/// links and scrollspy can find them. Elements without `name` keep whatever
/// `id` they had. Returns the number of ids written.
pub fn copy_names_to_ids(document: &NodeRef) -> usize {
    if !dom::exists(document, DOCBOOK) {
        return 0;
    }
    let mut copied = 0;
    for el in dom::select_all(document, TOC_TARGETS) {
        let Some(name) = dom::attr(&el, "name") else { continue };
        dom::set_attr(&el, "id", name);
        copied += 1;
    }
    copied
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink as _;

    #[test]
    fn copies_name_into_id() {
        let doc = kuchiki::parse_html().one(
            r#"<div class="docbook">
                <h1><a name="intro">Intro</a></h1>
                <h2><a name="setup" id="old">Setup</a></h2>
                <h3><a>No name</a></h3>
                <h3><a id="keep">Kept</a></h3>
                <h4><a name="deep">Deep</a></h4>
                <div class="container-fluid" name="body"></div>
            </div>
            <h1><a name="outside">Outside</a></h1>"#,
        );
        assert_eq!(copy_names_to_ids(&doc), 3);
        let ids: Vec<_> = dom::select_all(&doc, "a, .container-fluid")
            .iter()
            .map(|el| dom::attr(el, "id"))
            .collect();
        assert_eq!(
            ids,
            vec![
                Some("intro".to_string()),
                Some("setup".to_string()),
                None,
                Some("keep".to_string()),
                None,
                Some("body".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn nameless_anchor_keeps_its_id() {
        let doc = kuchiki::parse_html()
            .one(r#"<div class="docbook"><h2><a id="keep">Kept</a></h2></div>"#);
        assert_eq!(copy_names_to_ids(&doc), 0);
        let a = dom::select_one(&doc, "a").unwrap();
        assert_eq!(dom::attr(&a, "id").as_deref(), Some("keep"));
    }

    #[test]
    fn skipped_without_docbook_container() {
        let doc = kuchiki::parse_html().one(r#"<h1><a name="intro">Intro</a></h1>"#);
        assert_eq!(copy_names_to_ids(&doc), 0);
        assert_eq!(dom::attr(&dom::select_one(&doc, "a").unwrap(), "id"), None);
    }
}
