//! The block-level parser and the document it builds.

pub mod options;

mod block;
mod drawer;
mod heading;
mod inlines;
mod keyword;
mod list;
mod table;

use rustc_hash::FxHashMap;

use crate::nodes::{Node, NodeFootnote, NodeParagraph, SectionTree};
use crate::scanners;
use crate::strings;
use options::{Options, ParseOptions};

/// A parsed document: the node tree plus everything assembled alongside it
/// during the parse.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// The linear child sequence, in source order.
    pub children: Vec<Node>,

    /// The section tree mirroring the heading hierarchy.
    pub sections: SectionTree,

    /// The keyword table. Seeded from the parse options (`TODO`), then
    /// written to by every `#+KEY: value` line.
    pub keywords: FxHashMap<String, String>,

    /// Document-level properties.
    pub properties: FxHashMap<String, String>,

    /// URI schemes recognized by the plain and angle link forms.
    pub hyperlinks: Vec<String>,

    /// The format inline timestamps are parsed with.
    pub timestamp_format: String,

    /// Every footnote definition seen during the parse, block-level and
    /// inline, in source order.
    pub footnotes: Vec<NodeFootnote>,
}

impl Document {
    /// Creates an empty document configured by `options`.
    pub fn new(options: &ParseOptions) -> Self {
        let mut keywords = FxHashMap::default();
        keywords.insert("TODO".to_string(), options.todo_keywords.clone());
        Document {
            children: vec![],
            sections: SectionTree::default(),
            keywords,
            properties: FxHashMap::default(),
            hyperlinks: options.hyperlinks.clone(),
            timestamp_format: options.timestamp_format.clone(),
            footnotes: vec![],
        }
    }

    /// Looks a keyword up.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.keywords.get(key).map(|v| v.as_str())
    }

    /// Sets a keyword.
    pub fn set(&mut self, key: &str, value: &str) {
        self.keywords.insert(key.to_string(), value.to_string());
    }
}

/// Parses a full document.
///
/// The parser is total: every input produces a document. Unrecognized
/// constructs degrade to paragraphs.
///
/// ```rust
/// # use orgdown::{parse_document, Options};
/// # use orgdown::nodes::Node;
/// let document = parse_document("* Hi\n", &Options::default());
/// assert!(matches!(document.children[0], Node::Heading(ref h) if h.stars == 1));
/// ```
pub fn parse_document(input: &str, options: &Options) -> Document {
    let mut document = Document::new(&options.parse);
    let lines: Vec<&str> = input
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let parser = Parser::default();
    document.children = parser.parse_all(&mut document, &lines, false);
    document
}

/// The per-parse context. Holds no state of its own — everything assembled
/// during a parse lives in the [`Document`] — but a parse must keep one
/// exclusively; two concurrent parses each need their own pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser;

impl Parser {
    /// Tries every block recognizer, in order, at the start of `lines`.
    /// Returns the parsed node and the count of lines it consumed.
    pub fn parse(&self, d: &mut Document, lines: &[&str]) -> Option<(Node, usize)> {
        if let Some(r) = self.parse_blankline(lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_heading(d, lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_table(d, lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_list(d, lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_drawer(d, lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_block(d, lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_block_result(d, lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_keyword(d, lines) {
            return Some(r);
        }
        if let Some(r) = self.parse_footnote_definition(d, lines) {
            return Some(r);
        }
        self.parse_hr(lines)
    }

    /// Parses `lines` into a block sequence, falling back to the paragraph
    /// collector wherever no recognizer matches. With `raw` set the lines
    /// are kept as one verbatim text node instead.
    pub fn parse_all(&self, d: &mut Document, lines: &[&str], raw: bool) -> Vec<Node> {
        if raw && !lines.is_empty() {
            return self.parse_all_inline(d, &lines.join("\n"), true);
        }
        let mut nodes = vec![];
        let mut idx = 0;
        while idx < lines.len() {
            if let Some((node, n)) = self.parse(d, &lines[idx..]) {
                nodes.push(node);
                idx += n;
                continue;
            }
            let (node, next, n) = self.parse_paragraph(d, &lines[idx..]);
            nodes.push(node);
            if let Some(next) = next {
                nodes.push(next);
            }
            idx += n;
        }
        nodes
    }

    fn parse_blankline(&self, lines: &[&str]) -> Option<(Node, usize)> {
        let count = lines.iter().take_while(|line| strings::is_blank(line)).count();
        if count > 0 {
            Some((Node::Blankline(count), count))
        } else {
            None
        }
    }

    fn parse_hr(&self, lines: &[&str]) -> Option<(Node, usize)> {
        if scanners::hr(lines[0]) {
            Some((Node::Hr, 1))
        } else {
            None
        }
    }

    /// Collects a paragraph: every line up to the first one a recognizer
    /// accepts. The accepted block is returned alongside so its parse (and
    /// its side effects) happen exactly once.
    fn parse_paragraph(&self, d: &mut Document, lines: &[&str]) -> (Node, Option<Node>, usize) {
        let mut idx = 1;
        while idx < lines.len() {
            if let Some((next, n)) = self.parse(d, &lines[idx..]) {
                return (self.paragraph(d, &lines[..idx]), Some(next), idx + n);
            }
            idx += 1;
        }
        (self.paragraph(d, lines), None, idx)
    }

    fn paragraph(&self, d: &mut Document, lines: &[&str]) -> Node {
        Node::Paragraph(NodeParagraph {
            children: self.parse_all_inline(d, &lines.join("\n"), false),
        })
    }

    /// A top-level `[fn:label] …` definition. Runs until the next definition
    /// or heading.
    fn parse_footnote_definition(
        &self,
        d: &mut Document,
        lines: &[&str],
    ) -> Option<(Node, usize)> {
        let caps = scanners::footnote_definition(lines[0])?;
        let label = caps[1].to_string();
        let first = caps.get(2).map_or("", |m| m.as_str());

        let mut idx = 1;
        while idx < lines.len() {
            if scanners::footnote_definition(lines[idx]).is_some()
                || scanners::heading(lines[idx]).is_some()
            {
                break;
            }
            idx += 1;
        }

        let mut body = Vec::with_capacity(idx);
        body.push(first);
        body.extend_from_slice(&lines[1..idx]);
        let footnote = NodeFootnote {
            label,
            inline: false,
            definition: self.parse_all(d, &body, false),
        };
        d.footnotes.push(footnote.clone());
        Some((Node::Footnote(footnote), idx))
    }
}
