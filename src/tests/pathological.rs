use super::*;
use pretty_assertions::assert_eq;

use ntest::timeout;

#[test]
#[timeout(10000)]
fn nested_emphasis_markers() {
    // Not interested in the actual html, just that we don't timeout.
    let input = format!("{}x{}", "*/".repeat(500), "/*".repeat(500));
    let _ = crate::org_to_html(&input, &Options::default());
}

#[test]
#[timeout(10000)]
fn many_unclosed_markers() {
    // Every candidate closer is followed by a letter, so nothing opens.
    let input = "*a ".repeat(1000);
    assert_eq!(
        crate::org_to_html(&input, &Options::default()),
        format!("<p>\n{}\n</p>", input),
    );
}

#[test]
#[timeout(10000)]
fn many_link_openers() {
    // No closing bracket ever arrives; the whole line stays one text span.
    let input = "[[".repeat(2000);
    assert_eq!(
        crate::org_to_html(&input, &Options::default()),
        format!("<p>\n{}\n</p>", input),
    );
}

#[test]
#[timeout(10000)]
fn deeply_nested_lists() {
    // Not interested in the actual html, just that we don't timeout.
    let mut input = String::new();
    for depth in 0..200 {
        input.push_str(&" ".repeat(depth));
        input.push_str("- x\n");
    }
    let _ = crate::org_to_html(&input, &Options::default());
}
