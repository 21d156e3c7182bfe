use crate::nodes::{Node, NodeTable, NodeTableColumn, NodeTableRow, TableAlignment};
use crate::parser::{Document, Parser};
use crate::scanners;

fn alignment(marker: &str) -> TableAlignment {
    match marker {
        "l" => TableAlignment::Left,
        "c" => TableAlignment::Center,
        "r" => TableAlignment::Right,
        _ => TableAlignment::None,
    }
}

impl Parser {
    /// One table row. Separator rows carry no cells; for content rows the
    /// `<l>`/`<c>`/`<r>` markers found are returned so the end-of-table pass
    /// can tell alignment rows apart and apply their vector.
    fn parse_table_row(
        &self,
        d: &mut Document,
        line: &str,
    ) -> Option<(NodeTableRow, Vec<TableAlignment>)> {
        let caps = scanners::table_row(line)?;
        if scanners::table_separator(line) {
            return Some((
                NodeTableRow {
                    separator: true,
                    infos: false,
                    children: vec![],
                },
                vec![],
            ));
        }

        let mut aligns = vec![];
        let mut children = vec![];
        for cell in caps[2].split('|').filter(|cell| !cell.is_empty()) {
            let cell = cell.trim();
            if let Some(m) = scanners::table_align(cell) {
                aligns.push(alignment(&m[1]));
            }
            children.push(Node::TableColumn(NodeTableColumn {
                align: TableAlignment::None,
                width: cell.chars().count(),
                is_header: false,
                children: self.parse_all_inline(d, cell, false),
            }));
        }

        let infos = !children.is_empty() && aligns.len() == children.len();
        Some((
            NodeTableRow {
                separator: false,
                infos,
                children,
            },
            aligns,
        ))
    }

    /// Consecutive table rows; any non-row line (a blank line included)
    /// ends the table. Alignment, header flags and column widths are
    /// assigned in one finalize pass once the last row is in.
    pub(crate) fn parse_table(&self, d: &mut Document, lines: &[&str]) -> Option<(Node, usize)> {
        let mut rows = vec![];
        let mut idx = 0;
        while idx < lines.len() {
            match self.parse_table_row(d, lines[idx]) {
                Some(row) => {
                    rows.push(row);
                    idx += 1;
                }
                None => break,
            }
        }
        if rows.is_empty() {
            return None;
        }
        Some((Node::Table(finalize(rows)), idx))
    }
}

/// The one-shot post-processing pass run as the table closes.
fn finalize(rows: Vec<(NodeTableRow, Vec<TableAlignment>)>) -> NodeTable {
    let aligns = rows
        .iter()
        .find(|(row, _)| row.infos)
        .map(|(_, aligns)| aligns.clone())
        .unwrap_or_default();

    let has_separator = rows.iter().any(|(row, _)| row.separator);
    let first_separator = rows
        .iter()
        .position(|(row, _)| row.separator)
        .unwrap_or(rows.len());

    // Alignment rows count towards the widths so normalized tables keep
    // their `<l>`-marker columns wide enough.
    let mut widths: Vec<usize> = vec![];
    for (row, _) in &rows {
        if row.separator {
            continue;
        }
        for (i, col) in row.children.iter().enumerate() {
            let Node::TableColumn(col) = col else { continue };
            if i == widths.len() {
                widths.push(col.width);
            } else if col.width > widths[i] {
                widths[i] = col.width;
            }
        }
    }

    let mut children = Vec::with_capacity(rows.len());
    for (ix, (mut row, _)) in rows.into_iter().enumerate() {
        for (i, col) in row.children.iter_mut().enumerate() {
            let Node::TableColumn(col) = col else { continue };
            col.align = aligns.get(i).copied().unwrap_or_default();
            col.is_header = has_separator && ix < first_separator;
            col.width = widths.get(i).copied().unwrap_or(col.width);
        }
        children.push(Node::TableRow(row));
    }

    NodeTable { aligns, children }
}
