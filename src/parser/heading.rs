use crate::nodes::{Node, NodeHeading};
use crate::parser::{Document, Parser};
use crate::scanners;
use crate::strings;

impl Parser {
    /// A `* …` heading and every block under it. The section tree entry is
    /// created before the children are parsed so that nested headings file
    /// themselves underneath it.
    pub(crate) fn parse_heading(&self, d: &mut Document, lines: &[&str]) -> Option<(Node, usize)> {
        let caps = scanners::heading(lines[0])?;
        let stars = caps[1].len();
        let mut title = caps.get(2).map_or("", |m| m.as_str());

        let mut keyword = None;
        if let Some((first, rest)) = title.split_once(' ') {
            let todo = d.get("TODO").unwrap_or_default().to_string();
            if strings::split_keywords(&todo).contains(&first) {
                keyword = Some(first.to_string());
                title = rest;
            }
        }

        let index = d.sections.add(stars);

        let (priority, title_nodes, tags) = match scanners::heading_title(title) {
            Some(t) => {
                let priority = t.get(1).and_then(|m| m.as_str().chars().next());
                let title_nodes = self.parse_all_inline(d, &t[2], false);
                let tags = t.get(3).map_or_else(Vec::new, |m| {
                    m.as_str()
                        .split(':')
                        .filter(|tag| !tag.is_empty())
                        .map(str::to_string)
                        .collect()
                });
                (priority, title_nodes, tags)
            }
            None => (None, vec![], vec![]),
        };

        let mut idx = 1;
        while idx < lines.len() {
            if let Some(m) = scanners::heading(lines[idx]) {
                if m[1].len() <= stars {
                    break;
                }
            }
            idx += 1;
        }

        let mut children = self.parse_all(d, &lines[1..idx], false);
        let mut properties = None;
        if matches!(children.first(), Some(Node::Drawer(drawer))
            if caseless::default_caseless_match_str(&drawer.name, "PROPERTIES"))
        {
            if let Node::Drawer(drawer) = children.remove(0) {
                properties = Some(drawer);
            }
        }

        Some((
            Node::Heading(NodeHeading {
                stars,
                keyword,
                priority,
                title: title_nodes,
                tags,
                properties,
                index,
                children,
            }),
            idx,
        ))
    }
}
