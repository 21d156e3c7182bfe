use super::*;
use pretty_assertions::assert_eq;

#[test]
fn plain_link_runs_to_whitespace() {
    html(
        "visit https://example.com now\n",
        "<p>\nvisit <a href=\"https://example.com\">https://example.com</a> now\n</p>\n",
    );
}

#[test]
fn plain_link_requires_a_known_scheme() {
    html("ftp://example.com\n", "<p>\nftp://example.com\n</p>\n");
}

#[test]
fn angle_link() {
    html(
        "<https://example.com>\n",
        "<p>\n<a href=\"https://example.com\">https://example.com</a>\n</p>\n",
    );
}

#[test]
fn regular_link_with_description() {
    html(
        "[[https://example.com][the site]]\n",
        "<p>\n<a href=\"https://example.com\">the site</a>\n</p>\n",
    );
}

#[test]
fn regular_link_without_description() {
    html(
        "[[notes.txt]]\n",
        "<p>\n<a href=\"notes.txt\">notes.txt</a>\n</p>\n",
    );
}

#[test]
fn image_link() {
    html(
        "[[img/cat.png]]\n",
        "<p>\n<img src=\"img/cat.png\" alt=\"cat.png\"/>\n</p>\n",
    );
}

#[test]
fn video_link() {
    html(
        "[[demo.webm]]\n",
        "<p>\n<video src=\"demo.webm\">demo.webm</video>\n</p>\n",
    );
}

#[test]
fn described_media_stays_an_anchor() {
    html(
        "[[img/cat.png][a cat]]\n",
        "<p>\n<a href=\"img/cat.png\">a cat</a>\n</p>\n",
    );
}

#[test]
fn file_scheme_is_recognized() {
    html(
        "file://tmp/x.txt\n",
        "<p>\n<a href=\"file://tmp/x.txt\">file://tmp/x.txt</a>\n</p>\n",
    );
}

#[test]
fn percent_cookies() {
    html(
        "[50%] done, [3/4] there\n",
        "<p>\n<code>[50%]</code> done, <code>[3/4]</code> there\n</p>\n",
    );
}
