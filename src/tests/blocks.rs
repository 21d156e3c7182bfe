use super::*;
use pretty_assertions::assert_eq;

#[test]
fn src_block_dedents() {
    html(
        "#+BEGIN_SRC go\n  fmt.Println(\"x\")\n#+END_SRC\n",
        "<pre class=\"src src-go\">fmt.Println(\"x\")\n</pre>\n",
    );
}

#[test]
fn src_escapes_angle_brackets() {
    html(
        "#+BEGIN_SRC html\n<b>hi</b>\n#+END_SRC",
        "<pre class=\"src src-html\">&lt;b&gt;hi&lt;/b&gt;\n</pre>",
    );
}

#[test]
fn example_block_keeps_relative_indent() {
    html(
        "#+BEGIN_EXAMPLE\n  two\n    four\n#+END_EXAMPLE",
        "<pre class=\"src src-example\">two\n  four\n</pre>",
    );
}

#[test]
fn comma_escapes_are_undone() {
    html(
        "#+BEGIN_SRC org\n,* not a heading\n,#+not a keyword\n#+END_SRC",
        "<pre class=\"src src-org\">* not a heading\n#+not a keyword\n</pre>",
    );
}

#[test]
fn quote_block() {
    html(
        "#+BEGIN_QUOTE\nwise words\n#+END_QUOTE",
        "<blockquote>\n<p>\nwise words\n</p>\n</blockquote>",
    );
}

#[test]
fn center_block() {
    html(
        "#+BEGIN_CENTER\nmiddle\n#+END_CENTER",
        "<div style=\"text-align:center;\">\n<p>\nmiddle\n</p>\n</div>",
    );
}

#[test]
fn export_block_is_raw() {
    html("#+BEGIN_EXPORT html\n<b>raw</b>\n#+END_EXPORT", "<b>raw</b>");
}

#[test]
fn verse_preserves_line_breaks() {
    html(
        "#+BEGIN_VERSE\nroses\nviolets\n#+END_VERSE",
        "<p>\nroses<br />\nviolets\n</p>",
    );
}

#[test]
fn lowercase_delimiters() {
    html(
        "#+begin_src rust\nlet x = 1;\n#+end_src",
        "<pre class=\"src src-rust\">let x = 1;\n</pre>",
    );
}

#[test]
fn end_marker_must_match_type() {
    html(
        "#+BEGIN_SRC\nbody\n#+END_QUOTE\n#+END_SRC",
        "<pre class=\"src src-\">body\n#+END_QUOTE\n</pre>",
    );
}

#[test]
fn unknown_block_type_gets_a_div() {
    html(
        "#+BEGIN_NOTE\ntext\n#+END_NOTE",
        "<div class=\"note-block\">\n<p>\ntext\n</p>\n</div>",
    );
}

#[test]
fn quote_containing_src() {
    html(
        "#+BEGIN_QUOTE\n#+BEGIN_SRC sh\nls\n#+END_SRC\n#+END_QUOTE",
        "<blockquote>\n<pre class=\"src src-sh\">ls\n</pre>\n</blockquote>",
    );
}

#[test]
fn results_carrier_renders_children_only() {
    html("#+RESULTS:\n: 4\n", "<p>\n: 4\n</p>\n");
}

#[test]
fn results_end_at_next_results_line() {
    html(
        "#+RESULTS:\none\n#+RESULTS:\ntwo\n",
        "<p>\none\n</p>\n<p>\ntwo\n</p>\n",
    );
}
