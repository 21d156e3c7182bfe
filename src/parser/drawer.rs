use rustc_hash::FxHashMap;

use crate::nodes::{Node, NodeDrawer};
use crate::parser::{Document, Parser};
use crate::scanners;
use crate::strings;

impl Parser {
    /// A `:NAME: … :END:` drawer. Without a closing `:END:` the opener is
    /// left for the paragraph collector.
    pub(crate) fn parse_drawer(&self, d: &mut Document, lines: &[&str]) -> Option<(Node, usize)> {
        let caps = scanners::drawer_begin(lines[0])?;
        let level = caps[1].len();
        let name = caps[2].to_string();

        let mut idx = 1;
        while idx < lines.len() {
            if scanners::drawer_end(lines[idx]) {
                let body = &lines[1..idx];

                let mut properties = FxHashMap::default();
                if caseless::default_caseless_match_str(&name, "PROPERTIES") {
                    for line in body {
                        if strings::is_blank(line) {
                            continue;
                        }
                        if let Some(p) = scanners::drawer_property(line) {
                            properties.insert(
                                p[1].to_string(),
                                p.get(2).map_or_else(String::new, |m| m.as_str().to_string()),
                            );
                        }
                    }
                }

                let children = self.parse_all(d, body, false);
                return Some((
                    Node::Drawer(NodeDrawer {
                        name,
                        level,
                        properties,
                        children,
                    }),
                    idx + 1,
                ));
            }
            idx += 1;
        }

        log::debug!("drawer :{}: without :END:; leaving it to the paragraph collector", name);
        None
    }
}
