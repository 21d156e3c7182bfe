//! A parser and formatters for Org, the plain-text outline-and-markup
//! notation.
//!
//! The parser runs in two stages — a block-level recursive parser producing
//! a typed tree, and an inline parser for the text payloads — and every
//! input produces a document: unrecognized constructs degrade to
//! paragraphs. Renderers walk the finished tree; HTML, round-trip Org and a
//! debug tree ship in the box, with plugin seams for syntax highlighting
//! and per-node overrides.
//!
//! ```rust
//! use orgdown::{org_to_html, Options};
//!
//! assert_eq!(
//!     org_to_html("* Hello, /world/.\n", &Options::default()),
//!     "<h1 id=\"heading-1\">Hello, <i>world</i>.</h1>\n"
//! );
//! ```

pub mod adapters;
pub mod debug;
pub mod html;
pub mod nodes;
pub mod org;
pub mod parser;
mod render;
mod scanners;
mod strings;


pub use parser::options::{Options, ParseOptions, Plugins, RenderOptions, RenderPlugins};
pub use parser::{parse_document, Document, Parser};
pub use render::{render_node, render_nodes, Renderer};

/// Converts Org markup to HTML.
///
/// ```rust
/// use orgdown::{org_to_html, Options};
///
/// assert_eq!(org_to_html("- one", &Options::default()),
///            "<ul>\n<li>\n<p>\none\n</p>\n</li>\n</ul>");
/// ```
pub fn org_to_html(input: &str, options: &Options) -> String {
    org_to_html_with_plugins(input, options, &Plugins::default())
}

/// Converts Org markup to HTML, with plugins.
pub fn org_to_html_with_plugins(input: &str, options: &Options, plugins: &Plugins) -> String {
    let document = parse_document(input, options);
    html::format(&document, options, plugins)
}

/// Parses Org markup and re-emits it as Org.
///
/// For documents made of the constructs the parser recognizes this
/// round-trips the input byte for byte; tables come back normalized to
/// their column widths.
pub fn org_to_org(input: &str, options: &Options) -> String {
    let document = parse_document(input, options);
    org::format(&document)
}

/// Parses Org markup and renders the node tree in debug form.
///
/// ```rust
/// use orgdown::{org_to_debug, Options};
///
/// assert_eq!(org_to_debug("* A\nhello\n", &Options::default()),
///            "Heading\n  Paragraph\n    Text\n  Blankline[1]");
/// ```
pub fn org_to_debug(input: &str, options: &Options) -> String {
    let document = parse_document(input, options);
    debug::format(&document)
}
