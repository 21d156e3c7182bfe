use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keyword_writes_the_document_table() {
    let document = crate::parse_document("#+AUTHOR: ash\n", &Options::default());
    assert_eq!(document.get("AUTHOR"), Some("ash"));
}

#[test]
fn keywords_render_empty() {
    html("#+TITLE: demo\ntext\n", "\n<p>\ntext\n</p>\n");
}

#[test]
fn caption_is_not_recorded() {
    let document = crate::parse_document("#+CAPTION: a photo\n", &Options::default());
    assert_eq!(document.get("CAPTION"), None);
    assert_eq!(document.get("ATTR_HTML"), None);
}

#[test]
fn todo_keyword_line_replaces_the_set() {
    html(
        "#+TODO: WIP | SHIPPED\n* WIP thing\n",
        "\n<h1 id=\"heading-1\"><span class=\"todo\">WIP</span> thing</h1>\n",
    );
}

#[test]
fn value_may_be_empty() {
    let document = crate::parse_document("#+RESULT_FREE:\n", &Options::default());
    assert_eq!(document.get("RESULT_FREE"), Some(""));
}

#[test]
fn keywords_accumulate() {
    let document = crate::parse_document("#+A: 1\n#+B: 2\n", &Options::default());
    assert_eq!(document.get("A"), Some("1"));
    assert_eq!(document.get("B"), Some("2"));
    assert!(document.get("TODO").is_some());
}
