use crate::nodes::{Node, NodeKeyword};
use crate::parser::{Document, Parser};
use crate::scanners;

impl Parser {
    /// A `#+KEY: value` line. Writes the keyword table as a side effect;
    /// `CAPTION` and `ATTR_HTML` decorate a neighbouring node rather than
    /// the document, so they are recorded as nodes only.
    pub(crate) fn parse_keyword(&self, d: &mut Document, lines: &[&str]) -> Option<(Node, usize)> {
        let caps = scanners::keyword(lines[0])?;
        let key = caps[1].to_string();
        let value = caps.get(2).map_or("", |m| m.as_str()).to_string();

        match key.as_str() {
            "CAPTION" | "ATTR_HTML" => {}
            _ => d.set(&key, &value),
        }

        Some((Node::Keyword(NodeKeyword { key, value }), 1))
    }
}
