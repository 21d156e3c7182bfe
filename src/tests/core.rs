use super::*;
use pretty_assertions::assert_eq;

#[test]
fn minimal_heading() {
    html("* Hello\n", "<h1 id=\"heading-1\">Hello</h1>\n");
}

#[test]
fn heading_with_body() {
    html(
        "* Hello\n\nSome text.\n",
        "<h1 id=\"heading-1\">Hello</h1>\n\n<p>\nSome text.\n</p>\n",
    );
}

#[test]
fn paragraph_lines_share_one_p() {
    html("line one\nline two\n", "<p>\nline one\nline two\n</p>\n");
}

#[test]
fn horizontal_rule() {
    html("a\n-----\nb", "<p>\na\n</p>\n<hr/>\n<p>\nb\n</p>");
}

#[test]
fn four_dashes_are_text() {
    html("----\n", "<p>\n----\n</p>\n");
}

#[test]
fn unterminated_block_degrades_to_paragraph() {
    html(
        "#+BEGIN_SRC rust\nno end\n",
        "<p>\n#+BEGIN_SRC rust\nno end\n</p>\n",
    );
}

#[test]
fn empty_input() {
    html("", "");
}

#[test]
fn blank_lines_only() {
    html("\n\n\n", "");
}

#[test]
fn carriage_returns_are_trimmed() {
    html("* A\r\nb\r\n", "<h1 id=\"heading-1\">A</h1>\n<p>\nb\n</p>\n");
}

#[test]
fn blank_line_separates_paragraphs() {
    html(
        "a\n\nb\n",
        "<p>\na\n</p>\n\n<p>\nb\n</p>\n",
    );
}
