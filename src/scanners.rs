//! The recognizer set: every regular expression used by the block and inline
//! parsers, behind one accessor per construct.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref HEADING: Regex = Regex::new(r"^(\*+)\s+(.*)$").unwrap();
    static ref HEADING_TITLE: Regex =
        Regex::new(r"^(?:\[#([A-C])\])?\s*(.+?)(?:\s+:(.+?):)?$").unwrap();
    static ref LIST_ITEM: Regex =
        Regex::new(r"^(\s*)(([0-9]+|[a-zA-Z])[.)]|[+*-])(\s+(.*)|$)").unwrap();
    static ref TABLE_ROW: Regex = Regex::new(r"^(\s*)(\|.*)$").unwrap();
    static ref TABLE_SEPARATOR: Regex = Regex::new(r"^\s*\|[-+|]*\s*$").unwrap();
    static ref TABLE_ALIGN: Regex = Regex::new(r"^<(l|c|r)>$").unwrap();
    static ref DRAWER_BEGIN: Regex = Regex::new(r"^(\s*):(\S+):\s*$").unwrap();
    static ref DRAWER_END: Regex = Regex::new(r"(?i)^\s*:END:\s*$").unwrap();
    static ref DRAWER_PROPERTY: Regex = Regex::new(r"^\s*:(\S+):(?:\s+(.*))?$").unwrap();
    static ref BLOCK_BEGIN: Regex = Regex::new(r"(?i)^\s*#\+BEGIN_(\w+)\s*(.*)$").unwrap();
    static ref BLOCK_END: Regex = Regex::new(r"(?i)^\s*#\+END_(\w+)\s*$").unwrap();
    static ref BLOCK_RESULT: Regex = Regex::new(r"(?i)^\s*#\+RESULTS:").unwrap();
    static ref BLOCK_UNESCAPE: Regex = Regex::new(r"(?m)^([ \t]*),(\*|#\+)").unwrap();
    static ref KEYWORD: Regex = Regex::new(r"^\s*#\+([^:]+):(?:\s+(.*))?$").unwrap();
    static ref HR: Regex = Regex::new(r"^\s*-{5,}\s*$").unwrap();
    static ref FOOTNOTE_DEFINITION: Regex = Regex::new(r"^\[fn:([\w-]+)\]\s+(.*)$").unwrap();
    static ref PLAIN_LINK: Regex = Regex::new(r"^(\w+)://").unwrap();
    static ref ANGLE_LINK: Regex = Regex::new(r"^<(\w+):(.+)>").unwrap();
    static ref REGULAR_LINK: Regex = Regex::new(r"^\[\[(.+?)\](?:\[(.+?)\])?\]").unwrap();
    static ref PERCENT: Regex = Regex::new(r"^\[(\d+/\d+|\d+%)\]").unwrap();
    static ref FOOTNOTE_REFERENCE: Regex = Regex::new(r"^\[fn:([\w-]+)(?::(.*?))?\]").unwrap();
    static ref TIMESTAMP: Regex =
        Regex::new(r"^<(\d{4}-\d{2}-\d{2})( [A-Za-z]+)?( \d{2}:\d{2})?( \+\d+[dwmy])?>").unwrap();
}

pub fn heading(line: &str) -> Option<Captures> {
    HEADING.captures(line)
}

pub fn heading_title(title: &str) -> Option<Captures> {
    HEADING_TITLE.captures(title)
}

pub fn list_item(line: &str) -> Option<Captures> {
    LIST_ITEM.captures(line)
}

pub fn table_row(line: &str) -> Option<Captures> {
    TABLE_ROW.captures(line)
}

pub fn table_separator(line: &str) -> bool {
    TABLE_SEPARATOR.is_match(line)
}

pub fn table_align(cell: &str) -> Option<Captures> {
    TABLE_ALIGN.captures(cell)
}

pub fn drawer_begin(line: &str) -> Option<Captures> {
    DRAWER_BEGIN.captures(line)
}

pub fn drawer_end(line: &str) -> bool {
    DRAWER_END.is_match(line)
}

pub fn drawer_property(line: &str) -> Option<Captures> {
    DRAWER_PROPERTY.captures(line)
}

pub fn block_begin(line: &str) -> Option<Captures> {
    BLOCK_BEGIN.captures(line)
}

pub fn block_end(line: &str) -> Option<Captures> {
    BLOCK_END.captures(line)
}

pub fn block_result(line: &str) -> bool {
    BLOCK_RESULT.is_match(line)
}

/// Undoes the `,*` and `,#+` comma escapes at the start of `SRC`/`EXAMPLE`
/// body lines.
pub fn block_unescape(body: &str) -> String {
    BLOCK_UNESCAPE.replace_all(body, "$1$2").into_owned()
}

pub fn keyword(line: &str) -> Option<Captures> {
    KEYWORD.captures(line)
}

pub fn hr(line: &str) -> bool {
    HR.is_match(line)
}

pub fn footnote_definition(line: &str) -> Option<Captures> {
    FOOTNOTE_DEFINITION.captures(line)
}

pub fn plain_link(text: &str) -> Option<Captures> {
    PLAIN_LINK.captures(text)
}

pub fn angle_link(text: &str) -> Option<Captures> {
    ANGLE_LINK.captures(text)
}

pub fn regular_link(text: &str) -> Option<Captures> {
    REGULAR_LINK.captures(text)
}

pub fn percent(text: &str) -> Option<Captures> {
    PERCENT.captures(text)
}

pub fn footnote_reference(text: &str) -> Option<Captures> {
    FOOTNOTE_REFERENCE.captures(text)
}

pub fn timestamp(text: &str) -> Option<Captures> {
    TIMESTAMP.captures(text)
}
