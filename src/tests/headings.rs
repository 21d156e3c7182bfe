use super::*;
use pretty_assertions::assert_eq;

#[test]
fn keyword_priority_tags() {
    html(
        "* TODO [#A] Fix the bug :urgent:core:\n",
        "<h1 id=\"heading-1\"><span class=\"todo\">TODO</span> <span class=\"priority\">[#A]</span> \
         Fix the bug&#xa0;<span class=\"tag\">urgent</span>&#xa0;<span class=\"tag\">core</span></h1>\n",
    );
}

#[test]
fn done_keyword() {
    html(
        "* DONE Ship it\n",
        "<h1 id=\"heading-1\"><span class=\"todo\">DONE</span> Ship it</h1>\n",
    );
}

#[test]
fn unknown_state_stays_in_title() {
    html("* Maybe later\n", "<h1 id=\"heading-1\">Maybe later</h1>\n");
}

#[test]
fn custom_todo_set() {
    html_opts(
        "* WIP thing\n",
        "<h1 id=\"heading-1\"><span class=\"todo\">WIP</span> thing</h1>\n",
        |opts| opts.parse.todo_keywords = "WIP | DONE".to_string(),
    );
}

#[test]
fn nested_section_ids() {
    html(
        "* A\n** B\n* C\n",
        "<h1 id=\"heading-1\">A</h1>\n<h2 id=\"heading-1.1\">B</h2>\n<h1 id=\"heading-2\">C</h1>\n",
    );
}

#[test]
fn section_ids_when_skipping_levels() {
    html(
        "* A\n*** B\n** C\n",
        "<h1 id=\"heading-1\">A</h1>\n<h3 id=\"heading-1.1\">B</h3>\n<h2 id=\"heading-1.2\">C</h2>\n",
    );
}

#[test]
fn custom_id_property() {
    html(
        "* A\n:PROPERTIES:\n:CUSTOM_ID: intro\n:END:\nbody\n",
        "<h1 id=\"intro\">A</h1>\n<p>\nbody\n</p>\n",
    );
}

#[test]
fn emphasis_in_title() {
    html("* Say /hi/\n", "<h1 id=\"heading-1\">Say <i>hi</i></h1>\n");
}

#[test]
fn stars_need_a_space() {
    html("*bold*\n", "<p>\n<b>bold</b>\n</p>\n");
}
