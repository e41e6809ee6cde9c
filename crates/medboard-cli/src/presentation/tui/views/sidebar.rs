use medboard_types::Operation;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::border_style;

/// Operation picker
pub struct SidebarView {
    active: Operation,
    cursor: usize,
    focused: bool,
}

impl SidebarView {
    pub fn new(active: Operation, cursor: usize, focused: bool) -> Self {
        Self {
            active,
            cursor,
            focused,
        }
    }
}

impl Widget for SidebarView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = Operation::ALL
            .iter()
            .enumerate()
            .map(|(i, op)| {
                let marker = if *op == self.active { "●" } else { " " };
                let mut style = Style::default();
                if i == self.cursor && self.focused {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }
                if *op == self.active {
                    style = style.fg(Color::Cyan);
                }
                Line::from(vec![
                    Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(format!("{} {}", marker, op.label()), style),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Operations")
                    .borders(Borders::ALL)
                    .border_style(border_style(self.focused)),
            )
            .render(area, buf);
    }
}
