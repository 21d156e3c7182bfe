use crate::nodes::{ListKind, Node, NodeList, NodeListItem};
use crate::parser::{Document, Parser};
use crate::scanners;
use crate::strings;

/// Splits a `term :: description` title, returning the term and whatever
/// follows the separator.
fn split_descriptive(title: &str) -> Option<(&str, &str)> {
    if let Some(pos) = title.find(" :: ") {
        Some((&title[..pos], &title[pos + 4..]))
    } else {
        title.strip_suffix(" ::").map(|term| (term, ""))
    }
}

fn strip_status(title: &str) -> (Option<char>, &str) {
    for status in [' ', 'X', '-'] {
        let prefix = [b'[', status as u8, b']', b' '];
        if title.as_bytes().starts_with(&prefix) {
            return (Some(status), &title[4..]);
        }
    }
    (None, title)
}

impl Parser {
    /// One list item: the bullet line plus every following line that is
    /// blank or indented deeper than the bullet. Two consecutive blank
    /// lines end the item. The title and the body are re-parsed together,
    /// so nested blocks keep their column alignment.
    pub(crate) fn parse_list_item(
        &self,
        d: &mut Document,
        lines: &[&str],
    ) -> Option<(NodeListItem, ListKind, usize)> {
        let caps = scanners::list_item(lines[0])?;
        let level = caps[1].len();
        let bullet = caps[2].to_string();
        let (status, title) = strip_status(caps.get(5).map_or("", |m| m.as_str()));

        let mut kind = if bullet.contains(['-', '+', '*']) {
            ListKind::Unordered
        } else {
            ListKind::Ordered
        };
        let (title, first_line) = match split_descriptive(title) {
            Some((term, desc)) if kind == ListKind::Unordered => {
                kind = ListKind::Descriptive;
                (term, desc)
            }
            _ => (title, title),
        };

        let mut blanks = 0;
        let mut idx = 1;
        while idx < lines.len() {
            if strings::is_blank(lines[idx]) {
                blanks += 1;
                if blanks == 2 {
                    break;
                }
                idx += 1;
                continue;
            }
            blanks = 0;
            if strings::indent_width(lines[idx]) <= level {
                break;
            }
            idx += 1;
        }

        let mut body = Vec::with_capacity(idx);
        body.push(first_line);
        body.extend_from_slice(&lines[1..idx]);
        let children = self.parse_all(d, &body, false);

        Some((
            NodeListItem {
                level,
                bullet,
                status,
                title: title.to_string(),
                children,
            },
            kind,
            idx,
        ))
    }

    /// A run of sibling items of the same kind at the same indentation.
    pub(crate) fn parse_list(&self, d: &mut Document, lines: &[&str]) -> Option<(Node, usize)> {
        let (first, kind, mut idx) = self.parse_list_item(d, lines)?;
        let level = first.level;
        let mut children = vec![Node::ListItem(first)];

        while idx < lines.len() {
            if strings::indent_width(lines[idx]) < level {
                break;
            }
            match self.parse_list_item(d, &lines[idx..]) {
                Some((item, item_kind, n)) if item.level == level && item_kind == kind => {
                    children.push(Node::ListItem(item));
                    idx += n;
                }
                _ => break,
            }
        }

        Some((Node::List(NodeList { kind, level, children }), idx))
    }
}
