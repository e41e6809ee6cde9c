use medboard_engine::{EMPTY_NOTICE, Rendered, display_cell};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Row, Table, Widget},
};
use serde_json::Value;

/// Shown before the first result arrives
pub const NO_RESULT: &str = "No data to display";

/// Current result, drawn as a table
pub struct ResultTableView<'a> {
    title: String,
    result: Option<&'a Value>,
}

impl<'a> ResultTableView<'a> {
    pub fn new(title: String, result: Option<&'a Value>) -> Self {
        Self { title, result }
    }
}

impl<'a> Widget for ResultTableView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(self.title).borders(Borders::ALL);

        let Some(value) = self.result else {
            Paragraph::new(NO_RESULT)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        };

        let table = match medboard_engine::render(value) {
            Rendered::Table(table) => table,
            Rendered::Empty => {
                Paragraph::new(EMPTY_NOTICE).block(block).render(area, buf);
                return;
            }
        };

        let widths: Vec<Constraint> = table
            .column_widths()
            .into_iter()
            .map(|w| Constraint::Length(w as u16))
            .collect();
        let header = Row::new(table.columns.iter().map(String::as_str)).style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let rows = table
            .rows
            .iter()
            .map(|row| Row::new(row.iter().map(|cell| display_cell(cell).into_owned())));

        Table::new(rows, widths)
            .header(header)
            .column_spacing(2)
            .block(block)
            .render(area, buf);
    }
}
