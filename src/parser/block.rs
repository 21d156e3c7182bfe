use crate::nodes::{Node, NodeBlock, NodeBlockResult};
use crate::parser::{Document, Parser};
use crate::scanners;

impl Parser {
    /// A `#+BEGIN_…`/`#+END_…` block. The end marker must name the same
    /// type, case-insensitively; with no matching end the opener is left
    /// for the paragraph collector.
    ///
    /// `SRC`, `EXAMPLE` and `EXPORT` bodies are kept raw (the former two
    /// with their `,*`/`,#+` comma escapes undone); `VERSE` bodies are
    /// inline-parsed with their newlines preserved; everything else is
    /// parsed as blocks.
    pub(crate) fn parse_block(&self, d: &mut Document, lines: &[&str]) -> Option<(Node, usize)> {
        let caps = scanners::block_begin(lines[0])?;
        let kind = caps[1].to_uppercase();
        let parameters: Vec<String> = caps
            .get(2)
            .map_or("", |m| m.as_str())
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let mut idx = 1;
        while idx < lines.len() {
            if let Some(end) = scanners::block_end(lines[idx]) {
                if caseless::default_caseless_match_str(&end[1], &kind) {
                    let body = &lines[1..idx];
                    let children = match kind.as_str() {
                        "VERSE" => self.parse_all_inline(d, &body.join("\n"), false),
                        "SRC" | "EXAMPLE" => {
                            let unescaped: Vec<String> =
                                body.iter().map(|line| scanners::block_unescape(line)).collect();
                            let unescaped: Vec<&str> =
                                unescaped.iter().map(String::as_str).collect();
                            self.parse_all(d, &unescaped, true)
                        }
                        "EXPORT" => self.parse_all(d, body, true),
                        _ => self.parse_all(d, body, false),
                    };
                    return Some((
                        Node::Block(NodeBlock {
                            kind,
                            parameters,
                            children,
                        }),
                        idx + 1,
                    ));
                }
            }
            idx += 1;
        }

        log::debug!(
            "#+BEGIN_{} without a matching end; leaving it to the paragraph collector",
            kind
        );
        None
    }

    /// The `#+RESULTS:` carrier: its children run to the next `#+RESULTS:`
    /// line or the end of input.
    pub(crate) fn parse_block_result(
        &self,
        d: &mut Document,
        lines: &[&str],
    ) -> Option<(Node, usize)> {
        if !scanners::block_result(lines[0]) {
            return None;
        }

        let mut idx = 1;
        while idx < lines.len() && !scanners::block_result(lines[idx]) {
            idx += 1;
        }

        let children = self.parse_all(d, &lines[1..idx], false);
        Some((Node::BlockResult(NodeBlockResult { children }), idx))
    }
}
