use super::*;
use pretty_assertions::assert_eq;

#[test]
fn headings() {
    org("* Hello\n");
    org("* TODO [#A] Fix :a:b:\nbody\n");
    org("* A\n** B\n*** C\n* D\n");
}

#[test]
fn paragraphs_and_blank_runs() {
    org("a\n\nb\n");
    org("a\n\n\nb\n");
    org("line one\nline two\n");
}

#[test]
fn emphasis() {
    org("*bold* and =verb= and /both *nested*/\n");
}

#[test]
fn horizontal_rule() {
    org("a\n-----\nb\n");
}

#[test]
fn lists() {
    org("- a\n  - b\n- c\n");
    org("1. first\n2. second\n");
    org("- [X] done\n");
    org("- term :: meaning\n");
}

#[test]
fn blocks() {
    org("#+begin_src go\n  x := 1\n#+end_src\n");
    org("#+begin_quote\nwise\n#+end_quote\n");
    org("#+begin_verse\nroses\nviolets\n#+end_verse\n");
    org("#+begin_example\nkeep  spacing\n#+end_example\n");
}

#[test]
fn keywords() {
    org("#+TITLE: demo\n\ntext\n");
}

#[test]
fn drawers() {
    org(":LOGBOOK:\nnote\n:END:\n");
    org("* A\n:PROPERTIES:\n:CUSTOM_ID: x\n:END:\nbody\n");
}

#[test]
fn links() {
    org("see https://x.dev now\n");
    org("[[https://x.dev][site]]\n");
    org("<https:note>\n");
}

#[test]
fn footnotes() {
    org("Text[fn:1] more\n\n[fn:1] def\n");
    org("Word[fn:n:inline def] after\n");
}

#[test]
fn timestamps() {
    org("Due <2024-01-15 Mon 09:30 +1w> ok\n");
    org("<2024-01-15 Mon>\n");
}

#[test]
fn normalized_tables() {
    org("| a | bb |\n|---+----|\n| 1 | 2  |\n");
    org("| <l> | <r> |\n|-----+-----|\n| 1   | 2   |\n");
}

#[test]
fn results_carrier() {
    org("#+RESULTS:\n: 4\n");
}

#[test]
fn hard_breaks() {
    org("line\\\\\nnext\n");
}

#[test]
fn whole_document() {
    org(concat!(
        "#+TITLE: demo\n",
        "\n",
        "* TODO [#B] Heading /one/ :tag:\n",
        ":PROPERTIES:\n",
        ":CUSTOM_ID: one\n",
        ":END:\n",
        "\n",
        "Intro paragraph with *bold* text.\n",
        "\n",
        "- item one\n",
        "- item two\n",
        "  - nested\n",
        "\n",
        "#+begin_src rust\n",
        "fn main() {}\n",
        "#+end_src\n",
        "\n",
        "** Child\n",
        "-----\n",
        "* DONE Heading two\n",
    ));
}
