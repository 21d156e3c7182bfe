//! Org rendering: re-emits a parsed document as the markup it came from.

use std::io::{self, Write};

use crate::nodes::{
    ListKind, Node, NodeBackSlash, NodeBlock, NodeBlockResult, NodeDrawer, NodeEmphasis,
    NodeFootnote, NodeHeading, NodeKeyword, NodeLink, NodeList, NodeListItem, NodeParagraph,
    NodeTable, NodeTableColumn, NodeTableRow, NodeText, NodeTimestamp,
};
use crate::parser::Document;
use crate::render::{render_nodes, Renderer};

/// Formats a parsed document back into Org markup.
///
/// Blank-line runs and the separators contributed by child joins
/// reconstruct the original line structure; tables come back normalized to
/// their column widths.
pub fn format_document(document: &Document, output: &mut dyn Write) -> io::Result<()> {
    output.write_all(format(document).as_bytes())
}

pub(crate) fn format(document: &Document) -> String {
    let mut renderer = OrgRenderer;
    render_nodes(&mut renderer, &document.children, "\n")
}

struct OrgRenderer;

impl Renderer for OrgRenderer {
    fn render_heading(&mut self, node: &NodeHeading) -> String {
        let mut out = "*".repeat(node.stars);
        if let Some(keyword) = &node.keyword {
            out.push(' ');
            out.push_str(keyword);
        }
        if let Some(priority) = node.priority {
            out.push_str(&format!(" [#{}]", priority));
        }
        out.push(' ');
        out.push_str(&render_nodes(self, &node.title, ""));
        if !node.tags.is_empty() {
            out.push_str(" :");
            for tag in &node.tags {
                out.push_str(tag);
                out.push(':');
            }
        }
        if let Some(properties) = &node.properties {
            out.push('\n');
            out.push_str(&self.render_drawer(properties));
        }
        if !node.children.is_empty() {
            out.push('\n');
            out.push_str(&render_nodes(self, &node.children, "\n"));
        }
        out
    }

    fn render_list(&mut self, node: &NodeList) -> String {
        match node.kind {
            ListKind::Descriptive => {
                let mut items = Vec::with_capacity(node.children.len());
                for child in &node.children {
                    let Node::ListItem(item) = child else {
                        continue;
                    };
                    let mut out = item_prefix(item);
                    out.push_str(&item.title);
                    out.push_str(" :: ");
                    out.push_str(&render_nodes(self, &item.children, "\n"));
                    items.push(out);
                }
                items.join("\n")
            }
            _ => render_nodes(self, &node.children, "\n"),
        }
    }

    fn render_list_item(&mut self, node: &NodeListItem) -> String {
        // The first child line is the title text itself; prefixing the
        // bullet reconstructs the source line.
        let mut out = item_prefix(node);
        out.push_str(&render_nodes(self, &node.children, "\n"));
        out
    }

    fn render_table(&mut self, node: &NodeTable) -> String {
        let mut widths: Vec<usize> = vec![];
        for row in &node.children {
            let Node::TableRow(row) = row else { continue };
            for (i, col) in row.children.iter().enumerate() {
                let Node::TableColumn(col) = col else { continue };
                if i == widths.len() {
                    widths.push(col.width);
                } else {
                    widths[i] = widths[i].max(col.width);
                }
            }
        }

        let mut lines = Vec::with_capacity(node.children.len());
        for row in &node.children {
            let Node::TableRow(row) = row else { continue };
            if row.separator {
                let cells: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
                lines.push(format!("|{}|", cells.join("+")));
            } else if row.infos {
                let cells: Vec<String> = node
                    .aligns
                    .iter()
                    .zip(widths.iter().copied())
                    .map(|(align, w)| format!(" {:<1$} ", align.marker().unwrap_or(""), w))
                    .collect();
                lines.push(format!("|{}|", cells.join("|")));
            } else {
                let mut cells = Vec::with_capacity(row.children.len());
                for (i, col) in row.children.iter().enumerate() {
                    let Node::TableColumn(col) = col else { continue };
                    let body = render_nodes(self, &col.children, "");
                    cells.push(format!(" {:<1$} ", body, widths.get(i).copied().unwrap_or(0)));
                }
                lines.push(format!("|{}|", cells.join("|")));
            }
        }
        lines.join("\n")
    }

    fn render_table_row(&mut self, _node: &NodeTableRow) -> String {
        String::new()
    }

    fn render_table_column(&mut self, _node: &NodeTableColumn) -> String {
        String::new()
    }

    fn render_block(&mut self, node: &NodeBlock) -> String {
        let kind = node.kind.to_lowercase();
        let mut out = format!("#+begin_{}", kind);
        for param in &node.parameters {
            out.push(' ');
            out.push_str(param);
        }
        out.push('\n');
        if !node.children.is_empty() {
            let sep = if node.kind == "VERSE" { "" } else { "\n" };
            out.push_str(&render_nodes(self, &node.children, sep));
            out.push('\n');
        }
        out.push_str("#+end_");
        out.push_str(&kind);
        out
    }

    fn render_block_result(&mut self, node: &NodeBlockResult) -> String {
        let mut out = "#+RESULTS:".to_string();
        if !node.children.is_empty() {
            out.push('\n');
            out.push_str(&render_nodes(self, &node.children, "\n"));
        }
        out
    }

    fn render_drawer(&mut self, node: &NodeDrawer) -> String {
        let indent = " ".repeat(node.level);
        let mut out = format!("{}:{}:\n", indent, node.name);
        if !node.children.is_empty() {
            out.push_str(&render_nodes(self, &node.children, "\n"));
            out.push('\n');
        }
        out.push_str(&indent);
        out.push_str(":END:");
        out
    }

    fn render_keyword(&mut self, node: &NodeKeyword) -> String {
        if node.value.is_empty() {
            format!("#+{}:", node.key)
        } else {
            format!("#+{}: {}", node.key, node.value)
        }
    }

    fn render_paragraph(&mut self, node: &NodeParagraph) -> String {
        render_nodes(self, &node.children, "")
    }

    fn render_hr(&mut self) -> String {
        "-----".to_string()
    }

    fn render_blankline(&mut self, count: usize) -> String {
        // The child joins supply one newline per gap already.
        "\n".repeat(count.saturating_sub(1))
    }

    fn render_footnote(&mut self, node: &NodeFootnote) -> String {
        if node.inline {
            if node.definition.is_empty() {
                format!("[fn:{}]", node.label)
            } else {
                format!(
                    "[fn:{}:{}]",
                    node.label,
                    render_nodes(self, &node.definition, "")
                )
            }
        } else {
            format!(
                "[fn:{}] {}",
                node.label,
                render_nodes(self, &node.definition, "\n")
            )
        }
    }

    fn render_text(&mut self, node: &NodeText) -> String {
        node.content.clone()
    }

    fn render_line_break(&mut self, count: usize) -> String {
        "\n".repeat(count)
    }

    fn render_back_slash(&mut self, node: &NodeBackSlash) -> String {
        "\\".repeat(node.count)
    }

    fn render_emphasis(&mut self, node: &NodeEmphasis) -> String {
        format!(
            "{}{}{}",
            node.marker,
            render_nodes(self, &node.children, ""),
            node.marker
        )
    }

    fn render_link(&mut self, node: &NodeLink) -> String {
        if let Some(desc) = &node.desc {
            return format!("[[{}][{}]]", node.url, desc);
        }
        match &node.protocol {
            Some(protocol) if node.url.starts_with(&format!("{}://", protocol)) => {
                node.url.clone()
            }
            Some(_) => format!("<{}>", node.url),
            None => format!("[[{}]]", node.url),
        }
    }

    fn render_percent(&mut self, num: &str) -> String {
        format!("[{}]", num)
    }

    fn render_timestamp(&mut self, node: &NodeTimestamp) -> String {
        let mut out = format!("<{}", node.time.format("%Y-%m-%d %a"));
        if !node.is_date {
            out.push_str(&node.time.format(" %H:%M").to_string());
        }
        if let Some(interval) = &node.interval {
            out.push(' ');
            out.push_str(interval);
        }
        out.push('>');
        out
    }
}

fn item_prefix(item: &NodeListItem) -> String {
    let mut out = format!("{}{} ", " ".repeat(item.level), item.bullet);
    if let Some(status) = item.status {
        out.push_str(&format!("[{}] ", status));
    }
    out
}
