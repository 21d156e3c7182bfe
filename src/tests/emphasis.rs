use super::*;
use pretty_assertions::assert_eq;

#[test]
fn markers() {
    html(
        "*b* /i/ _u_ +s+ =c= ~v~\n",
        "<p>\n<b>b</b> <i>i</i> <span style=\"text-decoration:underline\">u</span> \
         <del>s</del> <code>c</code> <code>v</code>\n</p>\n",
    );
}

#[test]
fn second_star_has_no_opener() {
    html("*bold* bold*\n", "<p>\n<b>bold</b> bold*\n</p>\n");
}

#[test]
fn escaped_markers_stay_text() {
    html(
        "*bold* bold* *bold\\* \\*bold\\* \\*bold*\n",
        "<p>\n<b>bold</b> bold* *bold\\* \\*bold\\* \\*bold*\n</p>\n",
    );
}

#[test]
fn nested_emphasis() {
    html("*/both/*\n", "<p>\n<b><i>both</i></b>\n</p>\n");
}

#[test]
fn verbatim_body_is_raw() {
    html("=<tag>*x*=\n", "<p>\n<code><tag>*x*</code>\n</p>\n");
}

#[test]
fn non_ascii_borders() {
    html("（*bold*）\n", "<p>\n（<b>bold</b>）\n</p>\n");
}

#[test]
fn unclosed_marker_is_text() {
    html("*bold\n", "<p>\n*bold\n</p>\n");
}

#[test]
fn marker_mid_word_does_not_open() {
    html("foo*bar* baz\n", "<p>\nfoo*bar* baz\n</p>\n");
}

#[test]
fn empty_body_does_not_close() {
    // The first candidate closer sits right next to the opener; the span
    // widens to the outer pair and the body re-parses as nested emphasis.
    html("**bold**\n", "<p>\n<b><b>bold</b></b>\n</p>\n");
}

#[test]
fn punctuation_post_border() {
    html("really *bold*, yes\n", "<p>\nreally <b>bold</b>, yes\n</p>\n");
}
