//! Debug rendering: a two-space-indented tree of node kind names.

use std::io::{self, Write};

use crate::nodes::{
    Node, NodeBackSlash, NodeBlock, NodeBlockResult, NodeDrawer, NodeEmphasis, NodeFootnote,
    NodeHeading, NodeKeyword, NodeLink, NodeList, NodeListItem, NodeParagraph, NodeTable,
    NodeTableColumn, NodeTableRow, NodeText, NodeTimestamp,
};
use crate::parser::Document;
use crate::render::{render_nodes, Renderer};

/// Formats a parsed document as an indented kind-name tree.
pub fn format_document(document: &Document, output: &mut dyn Write) -> io::Result<()> {
    output.write_all(format(document).as_bytes())
}

pub(crate) fn format(document: &Document) -> String {
    let mut renderer = DebugRenderer { level: 0 };
    render_nodes(&mut renderer, &document.children, "\n")
}

struct DebugRenderer {
    level: usize,
}

impl DebugRenderer {
    fn indent(&self) -> String {
        "  ".repeat(self.level)
    }

    fn leaf(&self, name: &str) -> String {
        format!("{}{}", self.indent(), name)
    }

    /// A block with its children each on their own, deeper line.
    fn nested(&mut self, name: &str, children: &[Node]) -> String {
        if children.is_empty() {
            return self.leaf(name);
        }
        let indent = self.indent();
        self.level += 1;
        let body = render_nodes(self, children, "\n");
        self.level -= 1;
        format!("{}{}\n{}", indent, name, body)
    }

    /// A block whose inline children share one deeper line.
    fn inline_row(&mut self, name: &str, children: &[Node]) -> String {
        if children.is_empty() {
            return self.leaf(name);
        }
        let indent = self.indent();
        self.level += 1;
        let body = render_nodes(self, children, ",");
        let child_indent = self.indent();
        self.level -= 1;
        format!("{}{}\n{}{}", indent, name, child_indent, body)
    }
}

impl Renderer for DebugRenderer {
    fn render_heading(&mut self, node: &NodeHeading) -> String {
        self.nested("Heading", &node.children)
    }

    fn render_list(&mut self, node: &NodeList) -> String {
        self.nested("List", &node.children)
    }

    fn render_list_item(&mut self, node: &NodeListItem) -> String {
        self.nested("ListItem", &node.children)
    }

    fn render_table(&mut self, node: &NodeTable) -> String {
        self.nested("Table", &node.children)
    }

    fn render_table_row(&mut self, _node: &NodeTableRow) -> String {
        self.leaf("TableRow")
    }

    fn render_table_column(&mut self, node: &NodeTableColumn) -> String {
        self.nested("TableColumn", &node.children)
    }

    fn render_block(&mut self, node: &NodeBlock) -> String {
        let name = format!("Block[{}]", node.kind);
        match node.kind.as_str() {
            "SRC" | "EXAMPLE" | "VERSE" => self.inline_row(&name, &node.children),
            _ => self.nested(&name, &node.children),
        }
    }

    fn render_block_result(&mut self, node: &NodeBlockResult) -> String {
        self.nested("BlockResult", &node.children)
    }

    fn render_drawer(&mut self, node: &NodeDrawer) -> String {
        self.nested("Drawer", &node.children)
    }

    fn render_keyword(&mut self, _node: &NodeKeyword) -> String {
        self.leaf("Keyword")
    }

    fn render_paragraph(&mut self, node: &NodeParagraph) -> String {
        self.inline_row("Paragraph", &node.children)
    }

    fn render_hr(&mut self) -> String {
        self.leaf("Hr")
    }

    fn render_blankline(&mut self, count: usize) -> String {
        format!("{}Blankline[{}]", self.indent(), count)
    }

    fn render_footnote(&mut self, node: &NodeFootnote) -> String {
        if node.inline {
            "Footnote".to_string()
        } else {
            self.nested("Footnote", &node.definition)
        }
    }

    fn render_text(&mut self, _node: &NodeText) -> String {
        "Text".to_string()
    }

    fn render_line_break(&mut self, _count: usize) -> String {
        "LineBreak".to_string()
    }

    fn render_back_slash(&mut self, _node: &NodeBackSlash) -> String {
        "BackSlash".to_string()
    }

    fn render_emphasis(&mut self, _node: &NodeEmphasis) -> String {
        "Emphasis".to_string()
    }

    fn render_link(&mut self, _node: &NodeLink) -> String {
        "Link".to_string()
    }

    fn render_percent(&mut self, _num: &str) -> String {
        "Percent".to_string()
    }

    fn render_timestamp(&mut self, _node: &NodeTimestamp) -> String {
        "Timestamp".to_string()
    }
}
