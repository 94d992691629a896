// proxyctl - administration CLI for a MariaDB database proxy
// Copyright (C) 2026 proxyctl contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use comfy_table::{Cell, Color, Table};

/// Build a multi-row table: one styled header row, one line per resource.
/// An empty row list produces a header-only table.
pub fn collection(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    for row in rows {
        table.add_row(row);
    }
    table
}

/// Build a transposed two-column table for a single resource: each row is
/// (styled label, value).
pub fn resource(rows: Vec<(String, String)>) -> Table {
    let mut table = Table::new();
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label).fg(Color::Cyan), Cell::new(value)]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_renders_header_and_rows() {
        let table = collection(
            &["Server", "Address"],
            vec![
                vec!["srv1".into(), "127.0.0.1".into()],
                vec!["srv2".into(), "10.0.0.2".into()],
            ],
        );
        let rendered = table.to_string();

        assert!(rendered.contains("Server"));
        assert!(rendered.contains("Address"));
        assert!(rendered.contains("srv1"));
        assert!(rendered.contains("10.0.0.2"));
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let table = collection(
            &["Id", "Host"],
            vec![
                vec!["1".into(), "a-very-long-hostname.example.com".into()],
                vec!["2".into(), "short".into()],
            ],
        );
        let rendered = table.to_string();
        let widths: Vec<usize> = rendered.lines().map(|l| l.chars().count()).collect();

        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn empty_collection_is_header_only() {
        let table = collection(&["Monitor", "Status"], Vec::new());
        let rendered = table.to_string();

        assert!(rendered.contains("Monitor"));
        assert!(rendered.contains("Status"));
    }

    #[test]
    fn resource_table_is_label_value_pairs() {
        let table = resource(vec![
            ("Server".into(), "srv1".into()),
            ("Master ID".into(), String::new()),
        ]);
        let rendered = table.to_string();

        assert!(rendered.contains("Server"));
        assert!(rendered.contains("srv1"));
        assert!(rendered.contains("Master ID"));
    }
}
