//! The Org AST.

use chrono::NaiveDateTime;
use rustc_hash::FxHashMap;

/// The core AST node enum.
///
/// Block nodes own their children in document order; inline nodes appear in
/// the `children` sequences of paragraphs, headings, table columns and verse
/// blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// **Block**. A heading: the `* …` line plus every block underneath it,
    /// up to the next heading of equal or shallower depth.
    Heading(NodeHeading),

    /// **Block**. A plain, ordered or descriptive list. Contains
    /// [`Node::ListItem`]s.
    ///
    /// ``` org
    /// - An unordered list
    /// - Another item
    ///
    /// 1. An ordered list
    /// 2. Another item
    /// ```
    List(NodeList),

    /// **Block**. A list item. Contains other **blocks**, re-parsed from the
    /// item body.
    ListItem(NodeListItem),

    /// **Block**. A table. Contains [`Node::TableRow`]s.
    Table(NodeTable),

    /// **Block**. A table row. Contains [`Node::TableColumn`]s, unless the
    /// row is a `|---+---|` separator or a `| <l> | <r> |` alignment row.
    TableRow(NodeTableRow),

    /// **Block**. A single table cell. Contains **inlines**.
    TableColumn(NodeTableColumn),

    /// **Block**. A `#+BEGIN_…`/`#+END_…` block. `SRC` and `EXAMPLE` bodies
    /// are kept as one raw text child; `VERSE` bodies are inline-parsed;
    /// everything else contains **blocks**.
    Block(NodeBlock),

    /// **Block**. The `#+RESULTS:` carrier. Contains **blocks**.
    BlockResult(NodeBlockResult),

    /// **Block**. A `:NAME: … :END:` drawer. Contains **blocks**; a
    /// `PROPERTIES` drawer also carries its parsed property map.
    Drawer(NodeDrawer),

    /// **Block**. A `#+KEY: value` line. Recognized keywords are written
    /// into the document keyword table as a side effect of parsing.
    Keyword(NodeKeyword),

    /// **Block**. A paragraph. Contains **inlines**.
    Paragraph(NodeParagraph),

    /// **Block**. A horizontal rule (`-----`). Has no children.
    Hr,

    /// **Block**. A run of consecutive blank lines, with its length.
    Blankline(usize),

    /// A footnote. With `inline` false this is a top-level
    /// `[fn:label] definition` block; with `inline` true it is a
    /// `[fn:label:definition]` reference in running text.
    Footnote(NodeFootnote),

    /// **Inline**. Textual content. `raw` text is passed through to
    /// renderers verbatim, with no escaping.
    Text(NodeText),

    /// **Inline**. A run of newlines, with its length.
    LineBreak(usize),

    /// **Inline**. A run of backslashes; `line_break` is set when the run
    /// sits at the end of a line, which Org treats as a hard break.
    BackSlash(NodeBackSlash),

    /// **Inline**. Emphasised text: `*bold*`, `/italic/`, `_underline_`,
    /// `+strike+`, or the verbatim forms `=…=`, `~…~` and `` `…` ``.
    Emphasis(NodeEmphasis),

    /// **Inline**. A hyperlink: plain (`https://…`), angle
    /// (`<https:…>`) or regular (`[[url][description]]`).
    Link(NodeLink),

    /// **Inline**. A statistics cookie, `[3/4]` or `[75%]`.
    Percent(String),

    /// **Inline**. An active timestamp, `<2024-01-15 Mon 09:30 +1w>`.
    Timestamp(NodeTimestamp),
}

impl Node {
    /// The kind name used by the debug renderer.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Heading(..) => "Heading",
            Node::List(..) => "List",
            Node::ListItem(..) => "ListItem",
            Node::Table(..) => "Table",
            Node::TableRow(..) => "TableRow",
            Node::TableColumn(..) => "TableColumn",
            Node::Block(..) => "Block",
            Node::BlockResult(..) => "BlockResult",
            Node::Drawer(..) => "Drawer",
            Node::Keyword(..) => "Keyword",
            Node::Paragraph(..) => "Paragraph",
            Node::Hr => "Hr",
            Node::Blankline(..) => "Blankline",
            Node::Footnote(..) => "Footnote",
            Node::Text(..) => "Text",
            Node::LineBreak(..) => "LineBreak",
            Node::BackSlash(..) => "BackSlash",
            Node::Emphasis(..) => "Emphasis",
            Node::Link(..) => "Link",
            Node::Percent(..) => "Percent",
            Node::Timestamp(..) => "Timestamp",
        }
    }

    /// Indicates whether this node is a block node or an inline node.
    pub fn block(&self) -> bool {
        !matches!(
            self,
            Node::Text(..)
                | Node::LineBreak(..)
                | Node::BackSlash(..)
                | Node::Emphasis(..)
                | Node::Link(..)
                | Node::Percent(..)
                | Node::Timestamp(..)
        )
    }
}

/// The metadata and content of a heading.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeHeading {
    /// Count of leading `*`s; nesting depth, starting at 1.
    pub stars: usize,

    /// TODO-state keyword, when the first title token appears in the
    /// document's configured TODO set.
    pub keyword: Option<String>,

    /// Priority cookie (`[#A]`), one of `A`, `B`, `C`.
    pub priority: Option<char>,

    /// The heading title, inline-parsed.
    pub title: Vec<Node>,

    /// Trailing `:tag1:tag2:` tags.
    pub tags: Vec<String>,

    /// The `PROPERTIES` drawer detached from the first child position, if
    /// one was present.
    pub properties: Option<NodeDrawer>,

    /// Hierarchical section index: `"1"`, `"1.2"`, `"1.2.3"`, assigned at
    /// parse time.
    pub index: String,

    /// Every block under the heading, up to the next heading of equal or
    /// shallower depth.
    pub children: Vec<Node>,
}

impl NodeHeading {
    /// The anchor id used in HTML output: the `CUSTOM_ID` property when one
    /// is set, `heading-<index>` otherwise.
    pub fn id(&self) -> String {
        if let Some(drawer) = &self.properties {
            if let Some(id) = drawer.get("CUSTOM_ID") {
                return id.to_string();
            }
        }
        format!("heading-{}", self.index)
    }
}

/// The kind of list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    /// A `-`/`+`/`*` list.
    #[default]
    Unordered,

    /// A `1.`/`a)` list.
    Ordered,

    /// A `- term :: description` list.
    Descriptive,
}

/// The metadata of a list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeList {
    /// The kind of list, derived from the first item's bullet.
    pub kind: ListKind,

    /// Leading-space count of the first item; every item of the list sits at
    /// this indentation.
    pub level: usize,

    /// The [`Node::ListItem`]s.
    pub children: Vec<Node>,
}

/// The metadata and content of a list item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeListItem {
    /// Leading-space count of the bullet.
    pub level: usize,

    /// The bullet as written: `-`, `+`, `*`, `1.`, `a)`, …
    pub bullet: String,

    /// Checkbox state: `' '`, `X` or `-`, when the title starts with one.
    pub status: Option<char>,

    /// The raw title text. For descriptive items this is the term before
    /// `::`; the description joins the body.
    pub title: String,

    /// Blocks re-parsed from the title plus the indented item body.
    pub children: Vec<Node>,
}

impl NodeListItem {
    /// The list kind implied by this item's bullet.
    pub fn kind(&self) -> ListKind {
        if self.bullet.contains(['-', '+', '*']) {
            ListKind::Unordered
        } else {
            ListKind::Ordered
        }
    }
}

/// Alignment of a single table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableAlignment {
    /// Column content is unaligned.
    #[default]
    None,

    /// Column content is aligned left.
    Left,

    /// Column content is centered.
    Center,

    /// Column content is aligned right.
    Right,
}

impl TableAlignment {
    /// The value used for the HTML `align` attribute; empty when unaligned.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableAlignment::None => "",
            TableAlignment::Left => "left",
            TableAlignment::Center => "center",
            TableAlignment::Right => "right",
        }
    }

    /// The `<l>`/`<c>`/`<r>` marker this alignment round-trips to.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            TableAlignment::None => None,
            TableAlignment::Left => Some("<l>"),
            TableAlignment::Center => Some("<c>"),
            TableAlignment::Right => Some("<r>"),
        }
    }
}

/// The metadata of a table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeTable {
    /// Per-column alignment, taken from the first `| <l> | <r> |` row during
    /// the end-of-table pass. Empty when the table has no alignment row.
    pub aligns: Vec<TableAlignment>,

    /// The [`Node::TableRow`]s.
    pub children: Vec<Node>,
}

/// The metadata of a table row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeTableRow {
    /// True for `|---+---|` rules. Separator rows are not rendered; they
    /// split the header rows from the body.
    pub separator: bool,

    /// True when every cell of the row is an `<l>`/`<c>`/`<r>` alignment
    /// marker. Alignment rows are not rendered either.
    pub infos: bool,

    /// The [`Node::TableColumn`]s.
    pub children: Vec<Node>,
}

/// The metadata and content of a table cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeTableColumn {
    /// Alignment propagated from the table's alignment row.
    pub align: TableAlignment,

    /// Widest content width of this column across the table, in characters.
    /// Assigned during the end-of-table pass; the Org renderer pads cells
    /// to it.
    pub width: usize,

    /// True for every column of the rows preceding the first separator row,
    /// when the table has one.
    pub is_header: bool,

    /// The cell content, inline-parsed.
    pub children: Vec<Node>,
}

/// The metadata and content of a `#+BEGIN_…` block.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeBlock {
    /// The block type, uppercased: `SRC`, `EXAMPLE`, `QUOTE`, …
    pub kind: String,

    /// Whitespace-split arguments from the `#+BEGIN_` line; for `SRC` the
    /// first is the language.
    pub parameters: Vec<String>,

    /// Block children; see [`Node::Block`] for how the body is parsed per
    /// type.
    pub children: Vec<Node>,
}

/// The content of a `#+RESULTS:` carrier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeBlockResult {
    /// Blocks up to the next `#+RESULTS:` line or end of input.
    pub children: Vec<Node>,
}

/// The metadata and content of a drawer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeDrawer {
    /// The drawer name, as written between the colons.
    pub name: String,

    /// Leading-space count of the opening line.
    pub level: usize,

    /// `:KEY: value` pairs, populated for `PROPERTIES` drawers.
    pub properties: FxHashMap<String, String>,

    /// The drawer body, parsed as blocks.
    pub children: Vec<Node>,
}

impl NodeDrawer {
    /// Looks a property up by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|v| v.as_str())
    }
}

/// A `#+KEY: value` line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeKeyword {
    /// The keyword name.
    pub key: String,

    /// The keyword value; empty when the line carries none.
    pub value: String,
}

/// The content of a paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeParagraph {
    /// The paragraph content, inline-parsed with the original newlines
    /// preserved as [`Node::LineBreak`]s.
    pub children: Vec<Node>,
}

/// A footnote definition or reference.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeFootnote {
    /// The footnote label.
    pub label: String,

    /// True for `[fn:label:…]` references in running text, false for
    /// top-level `[fn:label] …` definitions.
    pub inline: bool,

    /// The definition body, as blocks. Empty for a plain reference.
    pub definition: Vec<Node>,
}

/// Textual content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeText {
    /// The text itself.
    pub content: String,

    /// Raw text is emitted verbatim: no escaping, no further inline
    /// recognition. Set for verbatim emphasis and `SRC`/`EXAMPLE` bodies.
    pub raw: bool,
}

/// A run of backslashes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeBackSlash {
    /// How many backslashes the run contains.
    pub count: usize,

    /// Set when the run ends its line, making it a hard break.
    pub line_break: bool,
}

/// Emphasised text.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeEmphasis {
    /// The emphasis marker: one of `*`, `/`, `+`, `_`, `=`, `~`, `` ` ``.
    pub marker: char,

    /// The emphasised body. For the verbatim markers `=`, `~` and `` ` ``
    /// this is a single raw text node.
    pub children: Vec<Node>,
}

/// The kind of link, derived from the target's file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// An ordinary hyperlink.
    Regular,

    /// A link to an image, rendered as `<img>`.
    Image,

    /// A link to a video, rendered as `<video>`.
    Video,
}

/// The details of a link's destination.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeLink {
    /// The link target.
    pub url: String,

    /// The description, when the `[[url][description]]` form carries one.
    pub desc: Option<String>,

    /// The URI scheme, when one was recognized.
    pub protocol: Option<String>,
}

static MIME_TYPES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "apng" => "image/apng",
    "avif" => "image/avif",
    "bmp" => "image/bmp",
    "gif" => "image/gif",
    "jpeg" => "image/jpeg",
    "jpg" => "image/jpeg",
    "png" => "image/png",
    "svg" => "image/svg+xml",
    "webp" => "image/webp",
    "mov" => "video/quicktime",
    "mp4" => "video/mp4",
    "ogv" => "video/ogg",
    "webm" => "video/webm",
};

impl NodeLink {
    /// Classifies the link by the MIME type of its target's extension. A
    /// link with a description is always [`LinkKind::Regular`].
    pub fn kind(&self) -> LinkKind {
        if self.desc.is_some() {
            return LinkKind::Regular;
        }
        let ext = match self.url.rsplit('.').next() {
            Some(ext) if !ext.contains('/') => ext.to_ascii_lowercase(),
            _ => return LinkKind::Regular,
        };
        match MIME_TYPES.get(ext.as_str()) {
            Some(mime) if mime.starts_with("image/") => LinkKind::Image,
            Some(mime) if mime.starts_with("video/") => LinkKind::Video,
            _ => LinkKind::Regular,
        }
    }

    /// The final path segment of the target, used as `alt` text.
    pub fn basename(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

/// A parsed timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTimestamp {
    /// The moment the timestamp names. Midnight when the source carried no
    /// time of day.
    pub time: NaiveDateTime,

    /// True when the source carried a date only.
    pub is_date: bool,

    /// The repeater interval (`+2w`), when present.
    pub interval: Option<String>,
}

/// A node of the section tree mirroring the heading hierarchy.
///
/// Sections live in the flat arena owned by [`SectionTree`] and link to each
/// other by index. A section refers to its heading by creation ordinal —
/// headings are created in document order, so the ordinal is also the
/// heading's position in a pre-order walk of the finished tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Ordinal of the referenced heading, in document order.
    pub heading: usize,

    /// Star count of the referenced heading; 0 for the root.
    pub stars: usize,

    /// Hierarchical index: `"1"`, `"1.2"`, …; empty for the root.
    pub index: String,

    /// Child sections, in document order.
    pub children: Vec<usize>,

    parent: Option<usize>,
}

/// The section tree of a document: a flat arena of [`Section`]s plus the
/// insertion cursor.
///
/// Sections are created strictly through [`SectionTree::add`] as headings
/// are parsed. Along any descent the star counts strictly increase.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionTree {
    arena: Vec<Section>,
    cursor: Option<usize>,
}

impl Default for SectionTree {
    fn default() -> Self {
        SectionTree {
            arena: vec![Section {
                heading: usize::MAX,
                stars: 0,
                index: String::new(),
                children: vec![],
                parent: None,
            }],
            cursor: None,
        }
    }
}

impl SectionTree {
    /// Inserts a section for the next heading and returns its hierarchical
    /// index.
    ///
    /// The insertion point is found from the cursor: a deeper heading nests
    /// under the last section, an equal one becomes its sibling, and a
    /// shallower one walks the parent links up until it fits.
    pub fn add(&mut self, stars: usize) -> String {
        let parent = match self.cursor {
            None => 0,
            Some(last) => {
                if stars > self.arena[last].stars {
                    last
                } else {
                    let mut parent = self.arena[last].parent.unwrap_or(0);
                    while parent != 0 && stars <= self.arena[parent].stars {
                        parent = self.arena[parent].parent.unwrap_or(0);
                    }
                    parent
                }
            }
        };

        let ordinal = self.len();
        let index = if parent == 0 {
            format!("{}", self.arena[parent].children.len() + 1)
        } else {
            format!(
                "{}.{}",
                self.arena[parent].index,
                self.arena[parent].children.len() + 1
            )
        };

        let ix = self.arena.len();
        self.arena.push(Section {
            heading: ordinal,
            stars,
            index: index.clone(),
            children: vec![],
            parent: Some(parent),
        });
        self.arena[parent].children.push(ix);
        self.cursor = Some(ix);
        index
    }

    /// The root section. Its children are the document's top sections.
    pub fn root(&self) -> &Section {
        &self.arena[0]
    }

    /// Looks a section up by arena index.
    pub fn get(&self, ix: usize) -> &Section {
        &self.arena[ix]
    }

    /// Number of sections, the root excluded.
    pub fn len(&self) -> usize {
        self.arena.len() - 1
    }

    /// True when the document has no headings.
    pub fn is_empty(&self) -> bool {
        self.arena.len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_indices_follow_heading_depth() {
        let mut tree = SectionTree::default();
        assert_eq!(tree.add(1), "1");
        assert_eq!(tree.add(2), "1.1");
        assert_eq!(tree.add(3), "1.1.1");
        assert_eq!(tree.add(2), "1.2");
        assert_eq!(tree.add(1), "2");
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn section_add_skipping_levels() {
        let mut tree = SectionTree::default();
        assert_eq!(tree.add(2), "1");
        assert_eq!(tree.add(4), "1.1");
        assert_eq!(tree.add(3), "1.2");
        assert_eq!(tree.add(1), "2");
    }

    #[test]
    fn link_kind_by_extension() {
        let link = |url: &str| NodeLink {
            url: url.to_string(),
            desc: None,
            protocol: None,
        };
        assert_eq!(link("https://x.dev/a.png").kind(), LinkKind::Image);
        assert_eq!(link("movie.webm").kind(), LinkKind::Video);
        assert_eq!(link("https://x.dev/page").kind(), LinkKind::Regular);
        let described = NodeLink {
            url: "a.png".to_string(),
            desc: Some("a".to_string()),
            protocol: None,
        };
        assert_eq!(described.kind(), LinkKind::Regular);
    }
}
