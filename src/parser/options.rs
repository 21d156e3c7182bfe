//! Configuration for the parser and renderers.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{Debug, Formatter};

use crate::adapters::{FootnoteAdapter, NodeAdapter, SyntaxHighlighterAdapter};

/// The default TODO keyword configuration, assigned to the document keyword
/// `TODO` before parsing.
pub const DEFAULT_TODO_KEYWORDS: &str = "TODO | DONE | CANCELED";

/// The default timestamp format, a [`chrono`] format string.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

fn default_hyperlinks() -> Vec<String> {
    vec!["http".to_string(), "https".to_string(), "file".to_string()]
}

/// Umbrella options struct.
#[derive(Default, Debug, Clone)]
pub struct Options {
    /// Configure parse-time options.
    pub parse: ParseOptions,

    /// Configure render-time options.
    pub render: RenderOptions,
}

/// Options for document construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct ParseOptions {
    /// The TODO-state configuration: a `|`-or-whitespace separated keyword
    /// list seeded into the document keyword table, consulted when splitting
    /// heading titles.
    ///
    /// ```rust
    /// # use orgdown::{org_to_html, Options};
    /// let mut options = Options::default();
    /// options.parse.todo_keywords = "WAIT".to_string();
    /// assert_eq!(org_to_html("* WAIT Call back\n", &options),
    ///            "<h1 id=\"heading-1\"><span class=\"todo\">WAIT</span> Call back</h1>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = DEFAULT_TODO_KEYWORDS.to_string()))]
    pub todo_keywords: String,

    /// URI schemes recognized by the plain and angle link forms.
    ///
    /// ```rust
    /// # use orgdown::{org_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(org_to_html("gemini://x.dev\n", &options),
    ///            "<p>\ngemini://x.dev\n</p>\n");
    ///
    /// options.parse.hyperlinks.push("gemini".to_string());
    /// assert_eq!(org_to_html("gemini://x.dev\n", &options),
    ///            "<p>\n<a href=\"gemini://x.dev\">gemini://x.dev</a>\n</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = default_hyperlinks()))]
    pub hyperlinks: Vec<String>,

    /// The [`chrono`] format string timestamps are parsed with. The weekday
    /// written in the source is not part of the parse; it is re-derived from
    /// the date when rendering.
    #[cfg_attr(feature = "bon", builder(default = DEFAULT_TIMESTAMP_FORMAT.to_string()))]
    pub timestamp_format: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            todo_keywords: DEFAULT_TODO_KEYWORDS.to_string(),
            hyperlinks: default_hyperlinks(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// Options for HTML output.
#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
pub struct RenderOptions {
    /// Prepend a table of contents built from the section tree. Suppressed
    /// when the document sets the `toc` keyword to `nil`.
    ///
    /// ```rust
    /// # use orgdown::{org_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.toc = true;
    /// assert_eq!(org_to_html("#+toc: nil\n* A\n", &options),
    ///            "\n<h1 id=\"heading-1\">A</h1>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub toc: bool,

    /// Added to each heading's star count to pick the HTML heading level.
    ///
    /// ```rust
    /// # use orgdown::{org_to_html, Options};
    /// let mut options = Options::default();
    /// options.render.heading_offset = 1;
    /// assert_eq!(org_to_html("* A\n", &options),
    ///            "<h2 id=\"heading-1\">A</h2>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub heading_offset: usize,
}

/// Umbrella plugins struct.
#[derive(Default, Clone)]
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    pub render: RenderPlugins<'p>,
}

impl Debug for Plugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugins").field("render", &self.render).finish()
    }
}

/// Plugins for alternative rendering.
#[derive(Default, Clone)]
pub struct RenderPlugins<'p> {
    /// Provide a syntax highlighter for the bodies of `SRC` blocks; its
    /// output replaces the whole `<pre>` element.
    ///
    /// ```rust
    /// # use orgdown::{org_to_html_with_plugins, Options, Plugins};
    /// # use orgdown::adapters::SyntaxHighlighterAdapter;
    /// let options = Options::default();
    /// let mut plugins = Plugins::default();
    /// let input = "#+BEGIN_SRC rust\nfn main();\n#+END_SRC\n";
    ///
    /// assert_eq!(org_to_html_with_plugins(input, &options, &plugins),
    ///            "<pre class=\"src src-rust\">fn main();\n</pre>\n");
    ///
    /// pub struct MockAdapter;
    /// impl SyntaxHighlighterAdapter for MockAdapter {
    ///     fn highlight(&self, lang: Option<&str>, code: &str) -> String {
    ///         format!("<pre lang=\"{}\">{}</pre>", lang.unwrap_or(""), code)
    ///     }
    /// }
    ///
    /// let adapter = MockAdapter;
    /// plugins.render.syntax_highlighter = Some(&adapter);
    ///
    /// assert_eq!(org_to_html_with_plugins(input, &options, &plugins),
    ///            "<pre lang=\"rust\">fn main();\n</pre>\n");
    /// ```
    pub syntax_highlighter: Option<&'p dyn SyntaxHighlighterAdapter>,

    /// Override rendering for individual nodes; returning `None` falls
    /// through to the default behaviour.
    pub node_adapter: Option<&'p dyn NodeAdapter>,

    /// Override rendering of the terminal footnote section.
    pub footnote_adapter: Option<&'p dyn FootnoteAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderPlugins")
            .field("syntax_highlighter", &"impl SyntaxHighlighterAdapter")
            .field("node_adapter", &"impl NodeAdapter")
            .field("footnote_adapter", &"impl FootnoteAdapter")
            .finish()
    }
}
