//! Renderer dispatch shared by the HTML, Org and debug formatters.

use crate::nodes::{
    Node, NodeBackSlash, NodeBlock, NodeBlockResult, NodeDrawer, NodeEmphasis, NodeFootnote,
    NodeHeading, NodeKeyword, NodeLink, NodeList, NodeListItem, NodeParagraph, NodeTable,
    NodeTableColumn, NodeTableRow, NodeText, NodeTimestamp,
};

/// A renderer: one method per node kind. [`render_node`] selects the right
/// method by the node's variant; renderers never mutate the tree, only
/// their own state.
pub trait Renderer {
    fn render_heading(&mut self, node: &NodeHeading) -> String;
    fn render_list(&mut self, node: &NodeList) -> String;
    fn render_list_item(&mut self, node: &NodeListItem) -> String;
    fn render_table(&mut self, node: &NodeTable) -> String;
    fn render_table_row(&mut self, node: &NodeTableRow) -> String;
    fn render_table_column(&mut self, node: &NodeTableColumn) -> String;
    fn render_block(&mut self, node: &NodeBlock) -> String;
    fn render_block_result(&mut self, node: &NodeBlockResult) -> String;
    fn render_drawer(&mut self, node: &NodeDrawer) -> String;
    fn render_keyword(&mut self, node: &NodeKeyword) -> String;
    fn render_paragraph(&mut self, node: &NodeParagraph) -> String;
    fn render_hr(&mut self) -> String;
    fn render_blankline(&mut self, count: usize) -> String;
    fn render_footnote(&mut self, node: &NodeFootnote) -> String;
    fn render_text(&mut self, node: &NodeText) -> String;
    fn render_line_break(&mut self, count: usize) -> String;
    fn render_back_slash(&mut self, node: &NodeBackSlash) -> String;
    fn render_emphasis(&mut self, node: &NodeEmphasis) -> String;
    fn render_link(&mut self, node: &NodeLink) -> String;
    fn render_percent(&mut self, num: &str) -> String;
    fn render_timestamp(&mut self, node: &NodeTimestamp) -> String;

    /// Hook consulted before the default dispatch; return `Some` to replace
    /// the output for `node`.
    fn render_node_override(&mut self, _node: &Node) -> Option<String> {
        None
    }
}

/// Renders one node by dispatching on its kind.
pub fn render_node<R: Renderer + ?Sized>(r: &mut R, node: &Node) -> String {
    if let Some(out) = r.render_node_override(node) {
        return out;
    }
    match node {
        Node::Heading(n) => r.render_heading(n),
        Node::List(n) => r.render_list(n),
        Node::ListItem(n) => r.render_list_item(n),
        Node::Table(n) => r.render_table(n),
        Node::TableRow(n) => r.render_table_row(n),
        Node::TableColumn(n) => r.render_table_column(n),
        Node::Block(n) => r.render_block(n),
        Node::BlockResult(n) => r.render_block_result(n),
        Node::Drawer(n) => r.render_drawer(n),
        Node::Keyword(n) => r.render_keyword(n),
        Node::Paragraph(n) => r.render_paragraph(n),
        Node::Hr => r.render_hr(),
        Node::Blankline(count) => r.render_blankline(*count),
        Node::Footnote(n) => r.render_footnote(n),
        Node::Text(n) => r.render_text(n),
        Node::LineBreak(count) => r.render_line_break(*count),
        Node::BackSlash(n) => r.render_back_slash(n),
        Node::Emphasis(n) => r.render_emphasis(n),
        Node::Link(n) => r.render_link(n),
        Node::Percent(num) => r.render_percent(num),
        Node::Timestamp(n) => r.render_timestamp(n),
    }
}

/// Renders a child sequence, joining the outputs with `sep`. Empty outputs
/// keep their separators; that is what makes blank lines round-trip.
pub fn render_nodes<R: Renderer + ?Sized>(r: &mut R, children: &[Node], sep: &str) -> String {
    children
        .iter()
        .map(|child| render_node(r, child))
        .collect::<Vec<_>>()
        .join(sep)
}
