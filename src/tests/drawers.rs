use super::*;
use pretty_assertions::assert_eq;

#[test]
fn drawer_renders_body_only() {
    html(":NOTES:\nremember\n:END:", "<p>\nremember\n</p>");
}

#[test]
fn end_marker_is_case_insensitive() {
    html(":LOGBOOK:\ndone\n:end:", "<p>\ndone\n</p>");
}

#[test]
fn unterminated_drawer_degrades() {
    html(":NOTES:\nnothing ends\n", "<p>\n:NOTES:\nnothing ends\n</p>\n");
}

#[test]
fn properties_are_parsed() {
    let document = crate::parse_document(
        "* A\n:PROPERTIES:\n:CUSTOM_ID: intro\n:ARCHIVE: old\n:END:\n",
        &Options::default(),
    );
    let crate::nodes::Node::Heading(heading) = &document.children[0] else {
        panic!("expected a heading");
    };
    let drawer = heading.properties.as_ref().unwrap();
    assert_eq!(drawer.get("CUSTOM_ID"), Some("intro"));
    assert_eq!(drawer.get("ARCHIVE"), Some("old"));
    assert_eq!(drawer.get("MISSING"), None);
}

#[test]
fn lowercase_properties_drawer_is_detached_too() {
    html("* A\n:properties:\n:CUSTOM_ID: x\n:end:\n", "<h1 id=\"x\">A</h1>\n");
}
