use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reference_with_later_definition() {
    html(
        "Text [fn:1].\n\n[fn:1] Body",
        "<p>\nText <sup><a id=\"fnr.1\" href=\"#fn.1\">[1]</a></sup>.\n</p>\n\n\n\
         <div id=\"footnotes\">\n<h2 class=\"footnotes\">Footnotes</h2>\n\
         <div id=\"text-footnotes\">\n\
         <div class=\"footdef\"><sup><a id=\"fn.1\" href=\"#fnr.1\">[1]</a></sup> <p>\nBody\n</p></div>\n\
         </div>\n</div>",
    );
}

#[test]
fn unreferenced_definition_is_omitted() {
    html("[fn:ghost] Nobody\n", "");
}

#[test]
fn reference_without_definition() {
    html(
        "See [fn:missing]\n",
        "<p>\nSee <sup><a id=\"fnr.missing\" href=\"#fn.missing\">[missing]</a></sup>\n</p>\n",
    );
}

#[test]
fn inline_definition() {
    html(
        "Word[fn:note:An aside]",
        "<p>\nWord<sup><a id=\"fnr.note\" href=\"#fn.note\">[note]</a></sup>\n</p>\n\
         <div id=\"footnotes\">\n<h2 class=\"footnotes\">Footnotes</h2>\n\
         <div id=\"text-footnotes\">\n\
         <div class=\"footdef\"><sup><a id=\"fn.note\" href=\"#fnr.note\">[note]</a></sup> <p>\nAn aside\n</p></div>\n\
         </div>\n</div>",
    );
}

#[test]
fn labels_sort_lexicographically() {
    html(
        "A[fn:10] B[fn:2]\n\n[fn:2] two\n[fn:10] ten",
        "<p>\nA<sup><a id=\"fnr.10\" href=\"#fn.10\">[10]</a></sup> \
         B<sup><a id=\"fnr.2\" href=\"#fn.2\">[2]</a></sup>\n</p>\n\n\n\n\
         <div id=\"footnotes\">\n<h2 class=\"footnotes\">Footnotes</h2>\n\
         <div id=\"text-footnotes\">\n\
         <div class=\"footdef\"><sup><a id=\"fn.10\" href=\"#fnr.10\">[10]</a></sup> <p>\nten\n</p></div>\n\
         <div class=\"footdef\"><sup><a id=\"fn.2\" href=\"#fnr.2\">[2]</a></sup> <p>\ntwo\n</p></div>\n\
         </div>\n</div>",
    );
}

#[test]
fn definitions_are_collected_document_wide() {
    let document = crate::parse_document(
        "x[fn:i:inline def]\n\n[fn:b] block def\n",
        &Options::default(),
    );
    assert_eq!(document.footnotes.len(), 2);
    assert!(document.footnotes.iter().any(|f| f.label == "i" && f.inline));
    assert!(document.footnotes.iter().any(|f| f.label == "b" && !f.inline));
}

#[test]
fn definition_stops_at_heading() {
    let document = crate::parse_document("[fn:a] body\n* H\n", &Options::default());
    let crate::nodes::Node::Footnote(footnote) = &document.children[0] else {
        panic!("expected a footnote definition");
    };
    assert_eq!(footnote.definition.len(), 1);
}
