//! Adapter traits for customizing rendering.

use crate::nodes::Node;
use crate::parser::Document;

/// Implement to provide syntax highlighting for `SRC` block bodies.
pub trait SyntaxHighlighterAdapter {
    /// Returns the full replacement for the `<pre>` element of a `SRC`
    /// block. `lang` is the block's first parameter, when it has one;
    /// `code` is the dedented body, unescaped.
    fn highlight(&self, lang: Option<&str>, code: &str) -> String;
}

/// Implement to override rendering of individual nodes.
pub trait NodeAdapter {
    /// Returns the replacement output for `node`, or `None` to fall
    /// through to the default rendering.
    fn render_node(&self, document: &Document, node: &Node) -> Option<String>;
}

/// Implement to override the terminal footnote section of the HTML output.
pub trait FootnoteAdapter {
    /// `footnotes` carries `(label, rendered definition)` pairs for every
    /// referenced label with a definition, sorted by label.
    fn render_footnotes(&self, footnotes: &[(String, String)]) -> String;
}
