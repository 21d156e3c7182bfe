use super::*;
use pretty_assertions::assert_eq;

#[test]
fn heading_tree() {
    debug("* A\nhello\n", "Heading\n  Paragraph\n    Text\n  Blankline[1]");
}

#[test]
fn src_children_on_one_line() {
    debug("#+BEGIN_SRC sh\nls\n#+END_SRC", "Block[SRC]\n  Text");
}

#[test]
fn paragraph_inline_names_joined() {
    debug(
        "a *b* <2024-01-15> [[x][y]] [fn:1] [50%]",
        "Paragraph\n  Text,Emphasis,Text,Timestamp,Text,Link,Text,Footnote,Text,Percent",
    );
}

#[test]
fn table_rows_are_leaves() {
    debug("| a |\n|---|", "Table\n  TableRow\n  TableRow");
}

#[test]
fn nested_blocks_indent() {
    debug(
        "#+BEGIN_QUOTE\ntext\n#+END_QUOTE",
        "Block[QUOTE]\n  Paragraph\n    Text",
    );
}

#[test]
fn list_tree() {
    debug(
        "- a\n  - b",
        "List\n  ListItem\n    Paragraph\n      Text\n    List\n      ListItem\n        Paragraph\n          Text",
    );
}

#[test]
fn blank_lines_carry_their_count() {
    debug("a\n\n\nb", "Paragraph\n  Text\nBlankline[2]\nParagraph\n  Text");
}

#[test]
fn footnote_definition_tree() {
    debug("[fn:1] body", "Footnote\n  Paragraph\n    Text");
}
