use chrono::NaiveDateTime;

use crate::nodes::{
    Node, NodeBackSlash, NodeEmphasis, NodeFootnote, NodeLink, NodeParagraph, NodeText,
    NodeTimestamp,
};
use crate::parser::{Document, Parser};
use crate::scanners;

const PRE_BORDER: &str = "-({'\"";
const POST_BORDER: &str = "-.,:!?;'\")}[";

/// Whether the character before byte `i` allows an emphasis marker at `i`
/// to open: start of string, whitespace, a small punctuation set, or any
/// non-ASCII character.
fn valid_pre_border(line: &str, i: usize) -> bool {
    match line[..i].chars().next_back() {
        None => true,
        Some(c) => c.is_whitespace() || PRE_BORDER.contains(c) || !c.is_ascii(),
    }
}

/// Whether the character at byte `i` allows an emphasis marker just before
/// it to close: end of string, whitespace, a small punctuation set, or any
/// non-ASCII character.
fn valid_post_border(line: &str, i: usize) -> bool {
    match line[i..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || POST_BORDER.contains(c) || !c.is_ascii(),
    }
}

fn next_char(line: &str, i: usize) -> usize {
    i + line[i..].chars().next().map_or(1, char::len_utf8)
}

impl Parser {
    /// Parses one logical string into inline nodes. With `raw` set the
    /// whole string becomes a single verbatim text node.
    pub fn parse_all_inline(&self, d: &mut Document, line: &str, raw: bool) -> Vec<Node> {
        if raw {
            return vec![Node::Text(NodeText {
                content: line.to_string(),
                raw: true,
            })];
        }

        let mut nodes = vec![];
        let mut idx = 0;
        while idx < line.len() {
            if let Some((node, n)) = self.parse_inline(d, line, idx) {
                nodes.push(node);
                idx += n;
                continue;
            }

            // No construct here: eat characters until one matches, then
            // flush the span as text.
            let start = idx;
            let mut probe = next_char(line, idx);
            let mut matched = None;
            while probe < line.len() {
                if let Some(hit) = self.parse_inline(d, line, probe) {
                    matched = Some(hit);
                    break;
                }
                probe = next_char(line, probe);
            }
            nodes.push(Node::Text(NodeText {
                content: line[start..probe].to_string(),
                raw: false,
            }));
            match matched {
                Some((node, n)) => {
                    nodes.push(node);
                    idx = probe + n;
                }
                None => idx = probe,
            }
        }
        nodes
    }

    /// Tries every inline recognizer at byte position `i`. Returns the node
    /// and the count of bytes it consumed.
    pub fn parse_inline(
        &self,
        d: &mut Document,
        line: &str,
        i: usize,
    ) -> Option<(Node, usize)> {
        if let Some(r) = self.parse_inline_backslash(line, i) {
            return Some(r);
        }
        if let Some(r) = self.parse_inline_line_break(line, i) {
            return Some(r);
        }
        if let Some(r) = self.parse_inline_emphasis(d, line, i) {
            return Some(r);
        }
        if let Some(r) = self.parse_inline_link(d, line, i) {
            return Some(r);
        }
        if let Some(r) = self.parse_inline_percent(line, i) {
            return Some(r);
        }
        if let Some(r) = self.parse_inline_footnote(d, line, i) {
            return Some(r);
        }
        self.parse_inline_timestamp(d, line, i)
    }

    fn parse_inline_backslash(&self, line: &str, i: usize) -> Option<(Node, usize)> {
        let count = line[i..].bytes().take_while(|&b| b == b'\\').count();
        if count == 0 {
            return None;
        }
        let line_break = line[i + count..].is_empty() || line[i + count..].starts_with('\n');
        Some((Node::BackSlash(NodeBackSlash { count, line_break }), count))
    }

    fn parse_inline_line_break(&self, line: &str, i: usize) -> Option<(Node, usize)> {
        let count = line[i..].bytes().take_while(|&b| b == b'\n').count();
        if count == 0 {
            return None;
        }
        Some((Node::LineBreak(count), count))
    }

    /// Emphasis opens at a marker with a valid pre-border and closes at a
    /// later same marker with a valid post-border and a non-empty body.
    /// The scan stops dead at a backslash-escaped marker; `*bold\*` opens
    /// nothing.
    fn parse_inline_emphasis(
        &self,
        d: &mut Document,
        line: &str,
        i: usize,
    ) -> Option<(Node, usize)> {
        let marker = line[i..].chars().next()?;
        let verbatim = match marker {
            '*' | '/' | '+' | '_' => false,
            '=' | '~' | '`' => true,
            _ => return None,
        };
        if !valid_pre_border(line, i) {
            return None;
        }

        let mut prev = None;
        for (off, c) in line[i + 1..].char_indices() {
            if c == marker {
                if prev == Some('\\') {
                    return None;
                }
                if off > 0 && valid_post_border(line, i + 1 + off + 1) {
                    let j = i + 1 + off;
                    let children = self.parse_all_inline(d, &line[i + 1..j], verbatim);
                    return Some((Node::Emphasis(NodeEmphasis { marker, children }), j + 1 - i));
                }
            }
            prev = Some(c);
        }
        None
    }

    /// The three link forms, in order: plain (`scheme://…` up to
    /// whitespace), angle (`<scheme:…>`), regular (`[[url][desc]]`).
    fn parse_inline_link(&self, d: &mut Document, line: &str, i: usize) -> Option<(Node, usize)> {
        let rest = &line[i..];

        if let Some(caps) = scanners::plain_link(rest) {
            if d.hyperlinks.iter().any(|h| h == &caps[1]) {
                let start = caps[0].len();
                let end = rest[start..]
                    .find(char::is_whitespace)
                    .map_or(rest.len(), |p| start + p);
                if end > start {
                    return Some((
                        Node::Link(NodeLink {
                            url: rest[..end].to_string(),
                            desc: None,
                            protocol: Some(caps[1].to_string()),
                        }),
                        end,
                    ));
                }
            }
        }

        if let Some(caps) = scanners::angle_link(rest) {
            if d.hyperlinks.iter().any(|h| h == &caps[1]) {
                return Some((
                    Node::Link(NodeLink {
                        url: format!("{}:{}", &caps[1], &caps[2]),
                        desc: None,
                        protocol: Some(caps[1].to_string()),
                    }),
                    caps[0].len(),
                ));
            }
        }

        let caps = scanners::regular_link(rest)?;
        let url = caps[1].to_string();
        let protocol = url.split_once("://").map(|(scheme, _)| scheme.to_string());
        Some((
            Node::Link(NodeLink {
                url,
                desc: caps.get(2).map(|m| m.as_str().to_string()),
                protocol,
            }),
            caps[0].len(),
        ))
    }

    fn parse_inline_percent(&self, line: &str, i: usize) -> Option<(Node, usize)> {
        let caps = scanners::percent(&line[i..])?;
        Some((Node::Percent(caps[1].to_string()), caps[0].len()))
    }

    /// A `[fn:label]` or `[fn:label:definition]` reference. An inline
    /// definition is parsed as one paragraph and registered document-wide.
    fn parse_inline_footnote(
        &self,
        d: &mut Document,
        line: &str,
        i: usize,
    ) -> Option<(Node, usize)> {
        let caps = scanners::footnote_reference(&line[i..])?;
        let label = caps[1].to_string();
        let consumed = caps[0].len();
        let definition = match caps.get(2) {
            Some(def) => {
                let def = def.as_str().to_string();
                vec![Node::Paragraph(NodeParagraph {
                    children: self.parse_all_inline(d, &def, false),
                })]
            }
            None => vec![],
        };

        let footnote = NodeFootnote {
            label,
            inline: true,
            definition,
        };
        if !footnote.definition.is_empty() {
            d.footnotes.push(footnote.clone());
        }
        Some((Node::Footnote(footnote), consumed))
    }

    /// An active `<…>` timestamp, parsed against the document's timestamp
    /// format. The weekday in the source is decorative; a missing time
    /// means a date-only stamp at midnight. A value chrono rejects stays
    /// plain text.
    fn parse_inline_timestamp(&self, d: &Document, line: &str, i: usize) -> Option<(Node, usize)> {
        let caps = scanners::timestamp(&line[i..])?;
        let (time_of_day, is_date) = match caps.get(3) {
            Some(t) => (t.as_str().trim(), false),
            None => ("00:00", true),
        };
        let interval = caps.get(4).map(|m| m.as_str().trim().to_string());

        let value = format!("{} {}", &caps[1], time_of_day);
        match NaiveDateTime::parse_from_str(&value, &d.timestamp_format) {
            Ok(time) => Some((
                Node::Timestamp(NodeTimestamp {
                    time,
                    is_date,
                    interval,
                }),
                caps[0].len(),
            )),
            Err(err) => {
                log::trace!(
                    "timestamp {:?} does not parse with {:?}: {}",
                    value,
                    d.timestamp_format,
                    err
                );
                None
            }
        }
    }
}
