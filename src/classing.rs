use kuchiki::NodeRef;

use crate::dom;

pub const CODE_BLOCK_CLASSES: &[&str] = &["prettyprint"];
pub const TABLE_CLASSES: &[&str] = &["pure-table", "pure-table-bordered"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Classed {
    pub code_blocks: usize,
    pub tables: usize,
}

/// Hooks code blocks up to the pretty-printer and tables to the theme's table
/// styles. Counts only elements whose class list actually changed.
pub fn apply(document: &NodeRef) -> Classed {
    let code_blocks = dom::select_all(document, "pre")
        .iter()
        .filter(|pre| dom::add_classes(pre, CODE_BLOCK_CLASSES))
        .count();
    let tables = dom::select_all(document, "table")
        .iter()
        .filter(|table| dom::add_classes(table, TABLE_CLASSES))
        .count();
    Classed {
        code_blocks,
        tables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuchiki::traits::TendrilSink as _;

    const PAGE: &str = r#"<pre>a</pre><pre class="lang-rust">b</pre><table><tr><td>1</td></tr></table>"#;

    #[test]
    fn adds_presentation_classes() {
        let doc = kuchiki::parse_html().one(PAGE);
        assert_eq!(
            apply(&doc),
            Classed {
                code_blocks: 2,
                tables: 1
            }
        );
        let pres = dom::select_all(&doc, "pre");
        assert_eq!(dom::classes(&pres[0]), vec!["prettyprint"]);
        assert_eq!(dom::classes(&pres[1]), vec!["lang-rust", "prettyprint"]);
        let table = dom::select_one(&doc, "table").unwrap();
        assert_eq!(
            dom::classes(&table),
            vec!["pure-table", "pure-table-bordered"]
        );
    }

    #[test]
    fn second_run_changes_nothing() {
        let doc = kuchiki::parse_html().one(PAGE);
        apply(&doc);
        assert_eq!(apply(&doc), Classed::default());
        let table = dom::select_one(&doc, "table").unwrap();
        assert_eq!(dom::classes(&table).len(), 2);
    }
}
