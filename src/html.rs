//! HTML rendering for the Org AST.

use std::io::{self, Write};

use rustc_hash::FxHashSet;

use crate::nodes::{
    LinkKind, ListKind, Node, NodeBackSlash, NodeBlock, NodeBlockResult, NodeDrawer, NodeEmphasis,
    NodeFootnote, NodeHeading, NodeKeyword, NodeLink, NodeList, NodeListItem, NodeParagraph,
    NodeTable, NodeTableColumn, NodeTableRow, NodeText, NodeTimestamp,
};
use crate::parser::options::{Options, Plugins};
use crate::parser::Document;
use crate::render::{render_node, render_nodes, Renderer};
use crate::strings;

/// Formats a parsed document as HTML, modified by the given options.
pub fn format_document(
    document: &Document,
    options: &Options,
    output: &mut dyn Write,
) -> io::Result<()> {
    format_document_with_plugins(document, options, output, &Plugins::default())
}

/// Formats a parsed document as HTML, modified by the given options.
/// Accepts custom plugins.
pub fn format_document_with_plugins(
    document: &Document,
    options: &Options,
    output: &mut dyn Write,
    plugins: &Plugins,
) -> io::Result<()> {
    output.write_all(format(document, options, plugins).as_bytes())
}

pub(crate) fn format(document: &Document, options: &Options, plugins: &Plugins) -> String {
    HtmlRenderer::new(document, options, plugins).format_document()
}

/// Writes `text` with the minimal escape the renderers guarantee: `<` and
/// `>` become entities, everything else passes through.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn block_literal(children: &[Node]) -> String {
    children
        .iter()
        .filter_map(|child| match child {
            Node::Text(t) => Some(t.content.as_str()),
            _ => None,
        })
        .collect()
}

fn collect_headings<'d>(nodes: &'d [Node], out: &mut Vec<&'d NodeHeading>) {
    for node in nodes {
        match node {
            Node::Heading(n) => {
                out.push(n);
                collect_headings(&n.children, out);
            }
            Node::List(n) => collect_headings(&n.children, out),
            Node::ListItem(n) => collect_headings(&n.children, out),
            Node::Block(n) => collect_headings(&n.children, out),
            Node::BlockResult(n) => collect_headings(&n.children, out),
            Node::Drawer(n) => collect_headings(&n.children, out),
            Node::Footnote(n) => collect_headings(&n.definition, out),
            _ => {}
        }
    }
}

struct HtmlRenderer<'o, 'd> {
    document: &'d Document,
    options: &'o Options,
    plugins: &'o Plugins<'o>,

    // Headings in document order; section k references headings[k].
    headings: Vec<&'d NodeHeading>,
    used_footnotes: FxHashSet<String>,
}

impl<'o, 'd> HtmlRenderer<'o, 'd> {
    fn new(document: &'d Document, options: &'o Options, plugins: &'o Plugins<'o>) -> Self {
        let mut headings = vec![];
        collect_headings(&document.children, &mut headings);
        HtmlRenderer {
            document,
            options,
            plugins,
            headings,
            used_footnotes: FxHashSet::default(),
        }
    }

    fn format_document(&mut self) -> String {
        let document = self.document;
        let body = render_nodes(self, &document.children, "\n");

        let mut out = String::new();
        if self.options.render.toc && document.get("toc") != Some("nil") {
            out.push_str(&self.toc());
        }
        out.push_str(&body);

        let footnotes = self.footnote_section();
        if !footnotes.is_empty() {
            out.push('\n');
            out.push_str(&footnotes);
        }
        out
    }

    /// The table of contents, built by walking the section tree rather than
    /// the linear children.
    fn toc(&mut self) -> String {
        let document = self.document;
        if document.sections.is_empty() {
            return String::new();
        }
        let list = self.toc_list(&document.sections.root().children);
        format!(
            "<div id=\"table-of-contents\">\n<h2>Table of Contents</h2>\n\
             <div id=\"text-table-of-contents\">\n{}\n</div></div>\n",
            list
        )
    }

    fn toc_list(&mut self, sections: &[usize]) -> String {
        let document = self.document;
        let mut items = Vec::with_capacity(sections.len());
        for &ix in sections {
            let section = document.sections.get(ix);
            let Some(&heading) = self.headings.get(section.heading) else {
                continue;
            };
            let title = render_nodes(self, &heading.title, "");
            let mut item = format!("<li><a href=\"#{}\">{}</a>", heading.id(), title);
            if !section.children.is_empty() {
                item.push('\n');
                item.push_str(&self.toc_list(&section.children));
                item.push('\n');
            }
            item.push_str("</li>");
            items.push(item);
        }
        format!("<ul>\n{}\n</ul>", items.join("\n"))
    }

    /// The footnote section: every referenced label with a definition,
    /// sorted by label, appended after the body.
    fn footnote_section(&mut self) -> String {
        let document = self.document;
        let mut labels: Vec<String> = self.used_footnotes.iter().cloned().collect();
        labels.sort();

        let mut items: Vec<(String, String)> = vec![];
        for label in labels {
            let Some(def) = document.footnotes.iter().find(|f| f.label == label) else {
                continue;
            };
            let body = render_nodes(self, &def.definition, "\n");
            items.push((label, body));
        }
        if items.is_empty() {
            return String::new();
        }

        if let Some(adapter) = self.plugins.render.footnote_adapter {
            return adapter.render_footnotes(&items);
        }

        let defs = items
            .iter()
            .map(|(label, body)| {
                format!(
                    "<div class=\"footdef\"><sup><a id=\"fn.{0}\" href=\"#fnr.{0}\">[{0}]</a></sup> {1}</div>",
                    label, body
                )
            })
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<div id=\"footnotes\">\n<h2 class=\"footnotes\">Footnotes</h2>\n\
             <div id=\"text-footnotes\">\n{}\n</div>\n</div>",
            defs
        )
    }
}

impl Renderer for HtmlRenderer<'_, '_> {
    fn render_node_override(&mut self, node: &Node) -> Option<String> {
        let adapter = self.plugins.render.node_adapter?;
        adapter.render_node(self.document, node)
    }

    fn render_heading(&mut self, node: &NodeHeading) -> String {
        let level = node.stars + self.options.render.heading_offset;
        let mut out = format!("<h{} id=\"{}\">", level, node.id());
        if let Some(keyword) = &node.keyword {
            out.push_str(&format!("<span class=\"todo\">{}</span> ", keyword));
        }
        if let Some(priority) = node.priority {
            out.push_str(&format!("<span class=\"priority\">[#{}]</span> ", priority));
        }
        out.push_str(&render_nodes(self, &node.title, ""));
        for tag in &node.tags {
            out.push_str(&format!("&#xa0;<span class=\"tag\">{}</span>", escape(tag)));
        }
        out.push_str(&format!("</h{}>", level));
        if !node.children.is_empty() {
            out.push('\n');
            out.push_str(&render_nodes(self, &node.children, "\n"));
        }
        out
    }

    fn render_list(&mut self, node: &NodeList) -> String {
        match node.kind {
            ListKind::Ordered => {
                format!("<ol>\n{}\n</ol>", render_nodes(self, &node.children, "\n"))
            }
            ListKind::Unordered => {
                format!("<ul>\n{}\n</ul>", render_nodes(self, &node.children, "\n"))
            }
            ListKind::Descriptive => {
                let mut items = Vec::with_capacity(node.children.len());
                for child in &node.children {
                    let Node::ListItem(item) = child else {
                        continue;
                    };
                    let body = render_nodes(self, &item.children, "\n");
                    items.push(format!(
                        "<dt>{}</dt>\n<dd>\n{}\n</dd>",
                        escape(&item.title),
                        body
                    ));
                }
                format!("<dl>\n{}\n</dl>", items.join("\n"))
            }
        }
    }

    fn render_list_item(&mut self, node: &NodeListItem) -> String {
        let mut content = render_nodes(self, &node.children, "\n");
        if let Some(status) = node.status {
            let badge = format!("<code>[{}]</code>", status);
            // The badge belongs inside the first paragraph when there is one.
            content = match content.strip_prefix("<p>\n") {
                Some(rest) => format!("<p>\n{} {}", badge, rest),
                None => format!("{} {}", badge, content),
            };
        }
        format!("<li>\n{}\n</li>", content)
    }

    fn render_table(&mut self, node: &NodeTable) -> String {
        let rows: Vec<String> = node
            .children
            .iter()
            .map(|row| render_node(self, row))
            .filter(|row| !row.is_empty())
            .collect();
        format!("<table>\n{}\n</table>", rows.join("\n"))
    }

    fn render_table_row(&mut self, node: &NodeTableRow) -> String {
        if node.separator || node.infos {
            return String::new();
        }
        format!("<tr>\n{}\n</tr>", render_nodes(self, &node.children, ""))
    }

    fn render_table_column(&mut self, node: &NodeTableColumn) -> String {
        let body = render_nodes(self, &node.children, "");
        let tag = if node.is_header { "th" } else { "td" };
        let align = node.align.as_str();
        if align.is_empty() {
            format!("<{tag}>{body}</{tag}>")
        } else {
            format!("<{tag} align=\"{align}\">{body}</{tag}>")
        }
    }

    fn render_block(&mut self, node: &NodeBlock) -> String {
        match node.kind.as_str() {
            "SRC" => {
                let lang = node.parameters.first().map(|s| s.as_str());
                let literal = block_literal(&node.children);
                let code = strings::dedent(&literal);
                match self.plugins.render.syntax_highlighter {
                    Some(highlighter) => highlighter.highlight(lang, &code),
                    None => format!(
                        "<pre class=\"src src-{}\">{}\n</pre>",
                        lang.unwrap_or(""),
                        escape(&code)
                    ),
                }
            }
            "EXAMPLE" => {
                let literal = block_literal(&node.children);
                format!(
                    "<pre class=\"src src-example\">{}\n</pre>",
                    escape(&strings::dedent(&literal))
                )
            }
            "EXPORT" => block_literal(&node.children),
            "CENTER" => format!(
                "<div style=\"text-align:center;\">\n{}\n</div>",
                render_nodes(self, &node.children, "\n")
            ),
            "QUOTE" => format!(
                "<blockquote>\n{}\n</blockquote>",
                render_nodes(self, &node.children, "\n")
            ),
            "VERSE" => {
                let mut body = String::new();
                for child in &node.children {
                    if let Node::LineBreak(count) = child {
                        body.push_str(&"<br />\n".repeat(*count));
                    } else {
                        body.push_str(&render_node(self, child));
                    }
                }
                format!("<p>\n{}\n</p>", body)
            }
            _ => format!(
                "<div class=\"{}-block\">\n{}\n</div>",
                node.kind.to_lowercase(),
                render_nodes(self, &node.children, "\n")
            ),
        }
    }

    fn render_block_result(&mut self, node: &NodeBlockResult) -> String {
        render_nodes(self, &node.children, "\n")
    }

    fn render_drawer(&mut self, node: &NodeDrawer) -> String {
        render_nodes(self, &node.children, "\n")
    }

    fn render_keyword(&mut self, _node: &NodeKeyword) -> String {
        String::new()
    }

    fn render_paragraph(&mut self, node: &NodeParagraph) -> String {
        format!("<p>\n{}\n</p>", render_nodes(self, &node.children, ""))
    }

    fn render_hr(&mut self) -> String {
        "<hr/>".to_string()
    }

    fn render_blankline(&mut self, _count: usize) -> String {
        String::new()
    }

    fn render_footnote(&mut self, node: &NodeFootnote) -> String {
        if !node.inline {
            // Definitions render in the terminal footnote section only.
            return String::new();
        }
        self.used_footnotes.insert(node.label.clone());
        format!(
            "<sup><a id=\"fnr.{0}\" href=\"#fn.{0}\">[{0}]</a></sup>",
            node.label
        )
    }

    fn render_text(&mut self, node: &NodeText) -> String {
        if node.raw {
            node.content.clone()
        } else {
            escape(&node.content)
        }
    }

    fn render_line_break(&mut self, count: usize) -> String {
        "\n".repeat(count)
    }

    fn render_back_slash(&mut self, node: &NodeBackSlash) -> String {
        if node.line_break {
            "<br />".to_string()
        } else {
            "\\".repeat(node.count)
        }
    }

    fn render_emphasis(&mut self, node: &NodeEmphasis) -> String {
        let body = render_nodes(self, &node.children, "");
        match node.marker {
            '=' | '~' | '`' => format!("<code>{}</code>", body),
            '*' => format!("<b>{}</b>", body),
            '_' => format!("<span style=\"text-decoration:underline\">{}</span>", body),
            '+' => format!("<del>{}</del>", body),
            '/' => format!("<i>{}</i>", body),
            marker => format!("{}{}{}", marker, body, marker),
        }
    }

    fn render_link(&mut self, node: &NodeLink) -> String {
        let url = escape(&node.url);
        match node.kind() {
            LinkKind::Image => format!("<img src=\"{}\" alt=\"{}\"/>", url, escape(node.basename())),
            LinkKind::Video => {
                format!("<video src=\"{}\">{}</video>", url, escape(node.basename()))
            }
            LinkKind::Regular => {
                let desc = node.desc.as_deref().unwrap_or(&node.url);
                format!("<a href=\"{}\">{}</a>", url, escape(desc))
            }
        }
    }

    fn render_percent(&mut self, num: &str) -> String {
        format!("<code>[{}]</code>", num)
    }

    fn render_timestamp(&mut self, _node: &NodeTimestamp) -> String {
        String::new()
    }
}
