//! Schema-less table rendering
//!
//! Turns whatever JSON the backend returned into rows of text. Nothing here
//! knows what a patient record looks like: columns come from the first
//! record, cells are plain strings.

use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Shown when a result has nothing tabular in it
pub const EMPTY_NOTICE: &str = "No data available.";

/// Outcome of rendering a result value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rendered {
    Table(Table),
    Empty,
}

impl Rendered {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Rendered::Table(table) => Some(table),
            Rendered::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Rendered::Empty)
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Table(table) => write!(f, "{}", table),
            Rendered::Empty => writeln!(f, "{}", EMPTY_NOTICE),
        }
    }
}

/// Rectangular table: every row has exactly `columns.len()` cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Display width of each column, header included
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .map(|row| display_cell(&row[i]).width())
                    .chain(std::iter::once(display_cell(header).width()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        write_line(f, &self.columns, &widths)?;
        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let cell = display_cell(cell);
        line.push_str(&cell);
        line.extend(std::iter::repeat_n(' ', width.saturating_sub(cell.width())));
    }
    writeln!(f, "{}", line.trim_end())
}

pub(crate) fn render(value: &Value) -> Rendered {
    let records: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) => vec![value],
        _ => return Rendered::Empty,
    };

    let Some(Value::Object(first)) = records.first() else {
        return Rendered::Empty;
    };

    let columns: Vec<String> = first.keys().cloned().collect();
    if columns.is_empty() {
        return Rendered::Empty;
    }

    let rows = records
        .iter()
        .map(|record| match record {
            Value::Object(map) => row_cells(map, &columns),
            // Non-record entries after the first have no fields to show
            _ => vec![String::new(); columns.len()],
        })
        .collect();

    Rendered::Table(Table { columns, rows })
}

fn row_cells(record: &Map<String, Value>, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|key| record.get(key).map(cell_text).unwrap_or_default())
        .collect()
}

/// Text form of a single cell: strings verbatim, everything else as compact JSON
/// Cell text as it appears on one display line: line breaks become spaces.
/// `Table::rows` keeps the text as received.
pub fn display_cell(text: &str) -> Cow<'_, str> {
    if !text.contains(['\n', '\r']) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", " ").replace(['\n', '\r'], " "))
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
